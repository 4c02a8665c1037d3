use anyhow::Context;
use helium_core::{
    default_profile, ConfigStore, DeploymentMode, HeliumError, ModelResolver, ModelSelector,
};

pub fn run(mode: Option<&str>, store: &ConfigStore) -> anyhow::Result<()> {
    let mode = match mode {
        Some(raw) => DeploymentMode::from_signal(Some(raw)),
        None => DeploymentMode::from_env(),
    };
    let model = resolve(mode, store)?;
    println!("{model}");
    Ok(())
}

fn resolve(mode: DeploymentMode, store: &ConfigStore) -> anyhow::Result<String> {
    // Config is only read when production asks for the pool, so a broken
    // config never affects local runs.
    let selector = || -> Result<String, HeliumError> {
        let pool = store.try_load()?.model_pool()?;
        Ok(pool.select_model()?)
    };
    ModelResolver::new(default_profile(), selector)
        .resolve_for(mode)
        .with_context(|| format!("Failed to resolve model for {mode} deployment"))
}
