pub const HELP_TEXT: &str = "Sequential: An interactive task queue for single-core organisms

Usage:

    sequential

The flags are:

-c
    Skips interactive mode and prints the current task
    directly to the command line

-h
    Show help text

Sequential opens an interactive CLI that allows the user to
see a single task without distraction, queue additional tasks,
and randomly choose a different task.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub inline: bool,
    pub help: bool,
}

impl Flags {
    /// Tokens are matched literally: `-ch` is its own flag and short flags do
    /// not otherwise combine. Anything unrecognised is ignored.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for arg in args {
            match arg.as_ref() {
                "-c" => flags.inline = true,
                "-h" => flags.help = true,
                "-ch" => {
                    flags.inline = true;
                    flags.help = true;
                }
                _ => {}
            }
        }
        flags
    }
}
