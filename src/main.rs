fn main() {
    nsgen::app::cli::run();
}
