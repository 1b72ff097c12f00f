use anyhow::Result;
use std::path::Path;

use warden_auth::PolicyFile;

pub fn run(base_dir: &Path) -> Result<()> {
    println!("Initializing Warden in {}", base_dir.display());

    std::fs::create_dir_all(base_dir)?;

    let policy_path = PolicyFile::default_path(base_dir);
    if policy_path.exists() {
        println!("Policy already exists at {}", policy_path.display());
        return Ok(());
    }

    PolicyFile::save(&PolicyFile::sample(), &policy_path)?;
    println!("Created policy: {}", policy_path.display());

    println!("\nNext steps:");
    println!("  1. Edit the grants in {}", policy_path.display());
    println!("  2. Run `warden check createMetrics --project prj_growth`");

    Ok(())
}
