pub mod generate;
pub mod info;

pub trait CounterCommand {
    fn run(self) -> anyhow::Result<()>;
}
