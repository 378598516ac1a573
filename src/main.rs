fn main() {
    promptlab::app::cli::run();
}
