use helium_core::{default_profile, AgentProfile};

pub fn run(json: bool) -> anyhow::Result<()> {
    let profile = default_profile();

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        print_summary(profile);
    }

    Ok(())
}

fn print_summary(profile: &AgentProfile) {
    println!("name: {} {}", profile.avatar, profile.name);
    println!("description: {}", profile.description);
    println!("avatar color: {}", profile.avatar_color);
    println!("fallback model: {}", profile.fallback_model);
    println!("default: {}", profile.is_default);
    println!(
        "mcps: {} configured, {} custom",
        profile.configured_mcps.len(),
        profile.custom_mcps.len()
    );
    println!(
        "tools: {} of {} enabled",
        profile.tool_flags.enabled().count(),
        profile.tool_flags.len()
    );
}
