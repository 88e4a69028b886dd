fn main() {
    std::process::exit(bioctl::run());
}
