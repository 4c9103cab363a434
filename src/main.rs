fn main() -> Result<(), Box<dyn std::error::Error>> {
    karaoke::runtime::run()
}
