pub(crate) mod handlers;

use crate::Error;
use crate::context::Context;

pub type CommandResult = Result<(), Error>;

/// Something a command can run.
///
/// Implemented for every `Fn(&mut Context, &[&str]) -> CommandResult`, so
/// plain functions and closures both work. `argv[0]` is the group name and
/// `argv[1]` the command name; the slices are only valid during the call.
pub trait Handler: Sync {
    fn call(&self, ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult;
}

impl<F> Handler for F
where
    F: Fn(&mut Context<'_>, &[&str]) -> CommandResult + Sync,
{
    fn call(&self, ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
        self(ctx, argv)
    }
}

/// Stand-in for commands declared without a handler.
fn handle_nothing(_ctx: &mut Context<'_>, _argv: &[&str]) -> CommandResult {
    Ok(())
}

pub struct Command<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub handler: Option<&'a dyn Handler>,
}

impl<'a> Command<'a> {
    pub const fn new(name: &'a str, description: &'a str, handler: &'a dyn Handler) -> Self {
        Self {
            name,
            description,
            handler: Some(handler),
        }
    }

    /// A command that does nothing and always succeeds.
    pub const fn without_handler(name: &'a str, description: &'a str) -> Self {
        Self {
            name,
            description,
            handler: None,
        }
    }

    pub fn run(&self, ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
        match self.handler {
            Some(handler) => handler.call(ctx, argv),
            None => handle_nothing(ctx, argv),
        }
    }
}

pub struct CommandGroup<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub commands: &'a [Command<'a>],
}

impl<'a> CommandGroup<'a> {
    pub const fn new(name: &'a str, description: &'a str, commands: &'a [Command<'a>]) -> Self {
        Self {
            name,
            description,
            commands,
        }
    }
}

/// Answer from a traversal visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Visit {
    Continue,
    /// On a group header, skip its commands. On a command, same as `Continue`.
    SkipGroup,
    Stop,
}

pub struct CommandRegistry<'a> {
    groups: &'a [CommandGroup<'a>],
}

impl<'a> CommandRegistry<'a> {
    pub const fn new(groups: &'a [CommandGroup<'a>]) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &'a [CommandGroup<'a>] {
        self.groups
    }

    /// Walk the table in order. The visitor sees `(group, None)` for each
    /// group header, then `(group, Some(command))` for the group's commands.
    ///
    /// Returns `true` if the visitor stopped the walk.
    pub fn traverse<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&CommandGroup<'a>, Option<&Command<'a>>) -> Visit,
    {
        for group in self.groups {
            match visit(group, None) {
                Visit::Continue => {}
                Visit::SkipGroup => continue,
                Visit::Stop => return true,
            }
            for command in group.commands {
                if visit(group, Some(command)) == Visit::Stop {
                    return true;
                }
            }
        }
        false
    }
}
