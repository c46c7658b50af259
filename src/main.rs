fn main() -> miette::Result<()> {
    runnables::cli::run()
}
