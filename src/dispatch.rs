use crate::commands::handlers::find_builtin;
use crate::commands::{Command, CommandResult, Visit};
use crate::context::Context;
use crate::{Error, MSG_ERROR, MSG_OK, MSG_UNKNOWN_COMMAND};

fn report(ctx: &mut Context<'_>, command: &Command<'_>, argv: &[&str]) -> CommandResult {
    let result = command.run(ctx, argv);
    match result {
        Ok(()) => {
            ctx.write(MSG_OK);
        }
        Err(_e) => {
            warn!("{} failed: {}", command.name, _e);
            ctx.write(MSG_ERROR);
        }
    }
    result
}

/// Resolve `argv` and run the matching command, writing `Ok`/`Error` after
/// it or `Unknown command` if nothing matched.
///
/// Built-ins are tried first. Otherwise `argv[0]` names a group of the
/// context's registry and `argv[1]` a command in it; groups whose name does
/// not match are skipped without looking at their commands.
///
/// A failing handler yields [`Error::HandlerFailed`]; no match yields
/// [`Error::UnknownCommand`]. Empty `argv` is a no-op.
pub fn dispatch(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
    let Some(&name) = argv.first() else {
        return Ok(());
    };

    if let Some(builtin) = find_builtin(name) {
        debug!("built-in {}", name);
        return report(ctx, builtin, argv).map_err(|_| Error::HandlerFailed);
    }

    let mut outcome = Err(Error::UnknownCommand);
    if let (Some(registry), Some(&sub)) = (ctx.registry(), argv.get(1)) {
        registry.traverse(|group, command| match command {
            None if group.name != name => Visit::SkipGroup,
            None => Visit::Continue,
            Some(cmd) if cmd.name != sub => Visit::Continue,
            Some(cmd) => {
                debug!("command {} {}", name, sub);
                outcome = report(ctx, cmd, argv).map_err(|_| Error::HandlerFailed);
                Visit::Stop
            }
        });
    }

    if outcome == Err(Error::UnknownCommand) {
        warn!("unknown command {}", name);
        ctx.write(MSG_UNKNOWN_COMMAND);
    }
    outcome
}
