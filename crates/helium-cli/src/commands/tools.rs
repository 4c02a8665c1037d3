use helium_core::{default_profile, Tool, ToolFlags};

pub fn run(name: Option<&str>) -> anyhow::Result<()> {
    let flags = &default_profile().tool_flags;

    match name {
        Some(name) => println!("{name}: {}", flags.status(name)),
        None => print_tool_list(flags),
    }

    Ok(())
}

fn print_tool_list(flags: &ToolFlags) {
    println!("Tool flags ({}):", flags.len());
    for (name, enabled) in flags.iter() {
        let state = if enabled { "enabled" } else { "disabled" };
        println!("{name} [{}] - {state}", tool_kind(name));
    }
}

fn tool_kind(name: &str) -> &'static str {
    if Tool::from_key(name).is_some() {
        "builtin"
    } else {
        "custom"
    }
}
