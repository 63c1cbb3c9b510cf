use clap::{Arg, ArgAction, Command};
use log::debug;

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    Command::new("arkcfg")
        .version("0.1.0")
        .about("Pushes stream resolution, frame rate and codec settings to a pool of IP cameras.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("apply")
                .about("Applies stream settings to one camera or to all cameras")
                .arg(Arg::new("target").short('t').long("target").value_name("IP").required(true).help("Camera address, or 'All Cameras'").action(ArgAction::Set))
                .arg(Arg::new("codec").long("codec").value_name("CODEC").default_value("H264").help("H264 or MJPEG").action(ArgAction::Set))
                .arg(Arg::new("resolution").short('r').long("resolution").value_name("WxH").required(true).help("Resolution label, e.g. 1280x720").action(ArgAction::Set))
                .arg(Arg::new("fps").short('f').long("fps").value_name("LABEL").required(true).help("Frame rate label, e.g. '25 FPS'").action(ArgAction::Set))
                .arg(Arg::new("timeout").long("timeout").value_name("SECONDS").help("Per-camera request timeout (overrides config)").value_parser(clap::value_parser!(u64).range(1..)).action(ArgAction::Set))
                .arg(Arg::new("dry-run").long("dry-run").help("Print the request URLs without sending them").action(ArgAction::SetTrue))
        )
        .subcommand(
            Command::new("list-options")
                .about("Lists the accepted codec, resolution and frame rate labels")
        )
        .subcommand(
            Command::new("list-cameras")
                .about("Lists the configured camera pool")
        )
}
