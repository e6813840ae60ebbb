fn main() -> anyhow::Result<()> {
    deploy_config::start(std::env::args())
}
