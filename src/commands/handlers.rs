use crate::commands::{Command, CommandResult, Visit};
use crate::context::Context;
use crate::{Error, NEWLINE};

/// Always available, matched before the user table.
pub(crate) static BUILTINS: [Command<'static>; 3] = [
    Command::new("help", "Print this help", &handle_help),
    Command::new("echo", "(on|off). Turn echoing On or Off", &handle_echo),
    Command::new("quit", "Quit command line interpreter", &handle_quit),
];

pub(crate) fn find_builtin(name: &str) -> Option<&'static Command<'static>> {
    BUILTINS.iter().find(|cmd| cmd.name == name)
}

fn write_entry(ctx: &mut Context<'_>, name: &str, description: &str) {
    ctx.write(name.as_bytes());
    ctx.write(b"\t");
    ctx.write(description.as_bytes());
    ctx.write(NEWLINE);
}

/// Lists the built-ins, then every group and command of the session's table.
fn handle_help(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
    if argv.len() > 3 {
        return Err(Error::InvalidArgument);
    }

    for cmd in &BUILTINS {
        write_entry(ctx, cmd.name, cmd.description);
    }

    let Some(registry) = ctx.registry() else {
        return Ok(());
    };
    registry.traverse(|group, command| {
        match command {
            None => {
                ctx.write(NEWLINE);
                write_entry(ctx, group.name, group.description);
            }
            Some(cmd) => {
                ctx.write(b" ");
                write_entry(ctx, cmd.name, cmd.description);
            }
        }
        Visit::Continue
    });
    Ok(())
}

fn handle_echo(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
    let [_, mode] = argv else {
        return Err(Error::InvalidArgument);
    };
    match *mode {
        "on" => ctx.set_echo(true),
        "off" => ctx.set_echo(false),
        _ => return Err(Error::InvalidArgument),
    }
    Ok(())
}

fn handle_quit(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
    if argv.len() != 1 {
        return Err(Error::InvalidArgument);
    }
    info!("quit");
    ctx.quit();
    Ok(())
}
