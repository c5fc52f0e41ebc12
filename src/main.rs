fn main() {
    if let Err(e) = todo_cli::cli::run() {
        todo_cli::cli::exit_with(e);
    }
}
