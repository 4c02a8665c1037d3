use helium_core::ConfigStore;

pub fn show(store: &ConfigStore) -> anyhow::Result<()> {
    let config = store.load();
    println!("# {}", store.path().display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
