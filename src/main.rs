fn main() {
    configargs::app::cli::run();
}
