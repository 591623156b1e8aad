/// The worker half of the program. It dials back to the master that spawned
/// it and serves exactly one assignment before exiting.
#[derive(Debug, Clone)]
pub struct Worker {
    /// Address of the spawning master, handed over on the command line at
    /// spawn time rather than resolved through any ambient lookup.
    pub(crate) master_addr: String,
}
