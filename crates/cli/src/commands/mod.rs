pub mod listen;
pub mod stream;

use clap::Subcommand;
pub use listen::ListenArgs;
pub use stream::StreamArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send rows of a CSV table as UDP datagrams, one every few seconds,
    /// mirroring each sent row to an output table.
    ///
    /// Example:
    ///   rowcast stream
    ///   rowcast stream --input us-counties.csv -n 10 --delay 1
    Stream(StreamArgs),

    /// Print every datagram received on a UDP port until interrupted.
    ///
    /// Example:
    ///   rowcast listen --port 9999
    Listen(ListenArgs),
}
