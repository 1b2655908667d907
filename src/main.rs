fn main() -> palette_match::Result<()> {
    palette_match::run(wild::args_os())
}
