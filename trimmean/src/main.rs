fn main() -> anyhow::Result<()> {
    trimmean::run()
}
