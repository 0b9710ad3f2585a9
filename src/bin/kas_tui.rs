use kas_core::config::ConfigManager;
use kas_core::core::JournalManager;
use kas_core::storage::FileStore;
use kas_core::tui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    kas_core::init();

    let config = ConfigManager::new().load()?;
    let storage = FileStore::new_default()?;
    let manager = JournalManager::load(Box::new(storage), config.locale_config())?;

    App::new(manager, &config).run()?;
    Ok(())
}
