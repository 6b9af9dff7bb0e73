/// Display driver state: `Idle -> Running -> Idle`, with `Quit` ending the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Running,
    Quit,
}
