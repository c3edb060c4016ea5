fn main() -> anyhow::Result<()> {
    stresstrend_lib::run()
}
