fn main() {
    focuscoach::app::cli::run();
}
