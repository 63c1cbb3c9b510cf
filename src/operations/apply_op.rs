use crate::camera::camera_controller::{CameraController, ConfigTransport};
use crate::camera::request_builder::RequestBuilder;
use crate::config_loader::MasterConfig;
use crate::core::camera_manager::{resolve_targets, CameraManager};
use crate::core::selections::Selections;
use crate::errors::AppError;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::{debug, error, info, warn};
use std::fmt;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

/// What happened to one camera during an apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(Ipv4Addr),
    Rejected(Ipv4Addr, u16),
    Failed(Ipv4Addr, String),
    /// The URL could not be built, so nothing was sent.
    NotSent(Ipv4Addr, AppError),
}

impl ApplyOutcome {
    pub fn address(&self) -> Ipv4Addr {
        match self {
            ApplyOutcome::Applied(a)
            | ApplyOutcome::Rejected(a, _)
            | ApplyOutcome::Failed(a, _)
            | ApplyOutcome::NotSent(a, _) => *a,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied(_))
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyOutcome::Applied(a) => write!(f, "{}: applied", a),
            ApplyOutcome::Rejected(a, status) => write!(f, "{}: rejected with HTTP {}", a, status),
            ApplyOutcome::Failed(a, cause) => write!(f, "{}: failed ({})", a, cause),
            ApplyOutcome::NotSent(a, err) => write!(f, "{}: not sent ({})", a, err),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<ApplyOutcome>,
}

impl ApplyReport {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_applied()).count()
    }

    pub fn all_applied(&self) -> bool {
        self.outcomes.iter().all(ApplyOutcome::is_applied)
    }
}

/// Pushes `selections` to each address in turn, one GET per camera and no retry.
///
/// Every address gets exactly one outcome, in input order.
pub async fn apply<T: ConfigTransport + ?Sized>(
    transport: &T,
    builder: &RequestBuilder,
    addresses: &[Ipv4Addr],
    selections: Selections,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    for &address in addresses {
        let cam_start_time = Instant::now();
        let outcome = match builder.url_for(&selections.request_for(address)) {
            Err(e) => ApplyOutcome::NotSent(address, e),
            Ok(url) => match transport.send(&url).await {
                Ok(status) if (200..300).contains(&status) => ApplyOutcome::Applied(address),
                Ok(status) => ApplyOutcome::Rejected(address, status),
                Err(e) => ApplyOutcome::Failed(address, e.to_string()),
            },
        };
        match &outcome {
            ApplyOutcome::Applied(_) => info!("✅ Configuration applied successfully to {}", address),
            ApplyOutcome::Rejected(_, status) => warn!("⚠️ Camera {} rejected configuration (HTTP {})", address, status),
            ApplyOutcome::Failed(_, cause) => error!("❌ Error configuring {}: {}", address, cause),
            ApplyOutcome::NotSent(_, err) => warn!("⚠️ Skipped {}: {}", address, err),
        }
        debug!("Camera {} handled in {:?}", address, cam_start_time.elapsed());
        report.outcomes.push(outcome);
    }
    report
}

fn required_arg<'a>(args: &'a ArgMatches, key: &str) -> Result<&'a str> {
    args.get_one::<String>(key)
        .map(String::as_str)
        .with_context(|| format!("Missing --{} argument for apply command", key))
}

pub async fn handle_apply_cli(
    master_config: &MasterConfig,
    camera_manager: &CameraManager,
    args: &ArgMatches,
) -> Result<()> {
    let op_start_time = Instant::now();
    let selections = Selections::from_labels(
        required_arg(args, "target")?,
        required_arg(args, "codec")?,
        required_arg(args, "resolution")?,
        required_arg(args, "fps")?,
    )
    .context("Invalid selection")?;
    debug!("Apply selections: {:?}", selections);

    let targets = resolve_targets(selections.target, &camera_manager.known_addresses())
        .context("Target is not a configured camera")?;
    let app_settings = &master_config.app_settings;
    let builder = RequestBuilder::new(app_settings.profile, app_settings.http_port);
    info!(
        "🎯 Applying {} / {} / {} to {} camera(s) ({} profile).",
        selections.codec, selections.resolution, selections.frame_rate, targets.len(), builder.profile()
    );

    if args.get_flag("dry-run") {
        let mut unbuildable = 0;
        for address in &targets {
            match builder.url_for(&selections.request_for(*address)) {
                Ok(url) => println!("{}", url),
                Err(e) => {
                    println!("{}: not sent ({})", address, e);
                    unbuildable += 1;
                }
            }
        }
        if unbuildable > 0 {
            bail!("{} of {} camera request(s) could not be built", unbuildable, targets.len());
        }
        return Ok(());
    }

    let timeout_secs = args
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(app_settings.request_timeout_secs);
    let controller = CameraController::new(Duration::from_secs(timeout_secs))?;
    let report = apply(&controller, &builder, &targets, selections).await;

    for outcome in &report.outcomes {
        let name = camera_manager.name_of(outcome.address()).unwrap_or("?");
        println!("[{}] {}", name, outcome);
    }
    info!(
        "🏁 {}/{} camera(s) applied in {:?}.",
        report.applied_count(),
        report.outcomes.len(),
        op_start_time.elapsed()
    );
    if !report.all_applied() {
        bail!("{} camera(s) did not apply the configuration", report.outcomes.len() - report.applied_count());
    }
    Ok(())
}
