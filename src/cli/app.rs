//! Main CLI application

use crate::error::{Result, TodoError};
use crate::ops::{add_item, create_list, list_items, mark_item, update_item};
use crate::settings::Settings;
use crate::store::Store;
use crate::ui::Reporter;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};

/// Operation flags, in the order they run
pub const OPERATIONS: &[&str] = &["create", "list", "add", "update", "mark"];

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with command line arguments
    pub fn run(self) -> Result<()> {
        let matches = self.command.get_matches();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_matches(&matches, &mut out)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("todo")
        .version(crate::VERSION)
        .about("To create, edit and view a to-do list from the command line")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to the list file (defaults to Data/ToDoList.json beside the executable)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print status lines and errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("create")
                .long("create")
                .help("Create a new to-do list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .value_name("STATUS")
                .help("List items: all, todo, in-progress or done"),
        )
        .arg(
            Arg::new("add")
                .long("add")
                .value_name("DESCRIPTION")
                .help("Add an item to the list"),
        )
        .arg(
            Arg::new("update")
                .long("update")
                .value_name("VALUE")
                .num_args(1..)
                .help("Update the description of an item: <ID> <DESCRIPTION>"),
        )
        .arg(
            Arg::new("mark")
                .long("mark")
                .value_name("VALUE")
                .num_args(1..)
                .help("Mark the status of an item: <ID> <STATUS>"),
        )
}

/// Resolve settings from parsed flags and run every requested operation
pub fn run_matches<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    let settings = Settings::from_matches(matches)?;
    let reporter = Reporter::new(settings.verbosity);
    reporter.print_debug(&format!("Using list at {}", settings.list_path.display()));

    let store = Store::new(settings.list_path).with_reporter(reporter);
    dispatch(matches, &store, out)
}

/// Run each operation flag present in `matches`, in the fixed order.
///
/// Recoverable errors become the operation's status line; anything else
/// aborts the remaining operations.
pub fn dispatch<W: Write>(matches: &ArgMatches, store: &Store, out: &mut W) -> Result<()> {
    if !OPERATIONS.iter().any(|name| is_present(matches, name)) {
        writeln!(
            out,
            "Try \"--help\" to see the list of arguments that are available for this tool"
        )?;
        return Ok(());
    }

    let reporter = *store.reporter();

    if matches.get_flag("create") {
        reporter.print_debug("Running --create");
        report(create_list(store, out), out)?;
    }

    if let Some(filter) = matches.get_one::<String>("list") {
        reporter.print_debug(&format!("Running --list {}", filter));
        report(list_items(store, filter, out), out)?;
    }

    if let Some(description) = matches.get_one::<String>("add") {
        reporter.print_debug("Running --add");
        report(add_item(store, description, out).map(|_| ()), out)?;
    }

    if let Some(values) = get_values(matches, "update") {
        reporter.print_debug("Running --update");
        report(update_item(store, &values, out), out)?;
    }

    if let Some(values) = get_values(matches, "mark") {
        reporter.print_debug("Running --mark");
        report(mark_item(store, &values, out), out)?;
    }

    Ok(())
}

/// Print a recoverable error as a status line, propagate the rest
fn report<W: Write>(result: Result<()>, out: &mut W) -> Result<()> {
    match result {
        Err(e) if e.is_recoverable() => {
            writeln!(out, "{}", e)?;
            Ok(())
        }
        other => other,
    }
}

fn is_present(matches: &ArgMatches, name: &str) -> bool {
    match name {
        "create" => matches.get_flag(name),
        _ => matches.contains_id(name),
    }
}

fn get_values(matches: &ArgMatches, name: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(name)
        .map(|values| values.cloned().collect())
}

/// Run the CLI application
pub fn run() -> Result<()> {
    App::new().run()
}

/// Turn an error into the process exit path
pub fn exit_with(err: TodoError) -> ! {
    Reporter::default().print_error(&err.to_string());
    std::process::exit(1);
}
