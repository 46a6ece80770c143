//! Command-line surface: `ptx prove` and `ptx verify`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::container::{self, Anchor, DohAnchor, ProofSystem, PtxRecord, ZkProof};
use crate::envelope::ProofEnvelope;
use crate::errors::PtxError;
use crate::field::{fr_from_decimal, fr_to_decimal};
use crate::hostname;
use crate::keys::KeyStore;
use crate::prover::{random_secret, Prover, SdvWitness};
use crate::signals::metadata_digest_hex;
use crate::verifier::{CheckOutcome, VerificationReport, Verifier, VerifyOptions};

/// Key id stamped into every emitted proof block.
const VERIFICATION_KEY_ID: &str = "sdv_poseidon_v1";

#[derive(Parser)]
#[command(name = "ptx", version, about = "Issue and verify DNS-anchored PTX tokens")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Print derived signals, hostnames, and timings.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a proof and write a PTX container.
    Prove(ProveArgs),
    /// Verify a PTX container.
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct ProveArgs {
    /// Domain name for the DoH anchor.
    #[arg(long)]
    pub domain: Option<String>,
    /// Alias for --domain.
    #[arg(long)]
    pub fqdn: Option<String>,
    /// Metadata JSON object.
    #[arg(long)]
    pub metadata: Option<String>,
    /// Hex-encoded metadata JSON object.
    #[arg(long = "metadataString")]
    pub metadata_hex: Option<String>,
    /// Nullifier as a decimal string; generated when absent.
    #[arg(long)]
    pub nullifier: Option<String>,
    /// Secret as a decimal string; generated when absent.
    #[arg(long)]
    pub secret: Option<String>,
    /// Trust method (1 = DoH, 2 = Gist).
    #[arg(long = "trustMethod", default_value_t = 1)]
    pub trust_method: i32,
    /// Wrap an existing proof envelope JSON instead of proving natively.
    #[arg(long)]
    pub proof: Option<PathBuf>,
    /// Output path for the container.
    #[arg(long, default_value = "output.ptx")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Path to the PTX file.
    pub file: PathBuf,
    /// Comma-separated scopes the token must intersect.
    #[arg(long = "intended-scope", value_delimiter = ',')]
    pub intended_scope: Vec<String>,
    /// Comma-separated audiences the token must belong to.
    #[arg(long = "intended-audience", value_delimiter = ',')]
    pub intended_audience: Vec<String>,
    /// Fail on missing metadata keys and never regenerate key material.
    #[arg(long)]
    pub strict: bool,
    /// Redis URL enabling the replay check.
    #[arg(long = "redis-url")]
    pub redis_url: Option<String>,
    /// Machine output: dns seconds, zk seconds, status.
    #[arg(long = "time-dev")]
    pub time_dev: bool,
    /// Crypto-only shortcut: skip policy, replay, semantic, and DNS checks.
    #[arg(long = "time-skip-dev")]
    pub time_skip_dev: bool,
}

/// Installs the global tracing subscriber; diagnostics go to stderr so the
/// machine-readable stdout formats stay clean.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Prove(args) => run_prove(args).map(|()| ExitCode::SUCCESS),
        Command::Verify(args) => run_verify(args, cli.verbose).await,
    }
}

fn run_prove(args: ProveArgs) -> Result<()> {
    let domain = args
        .domain
        .or(args.fqdn)
        .ok_or_else(|| anyhow!("--domain or --fqdn is required"))?;

    let metadata_json = match (args.metadata_hex, args.metadata) {
        (Some(hex_str), _) => {
            let decoded = hex::decode(hex_str.trim()).context("--metadataString is not hex")?;
            String::from_utf8(decoded).context("--metadataString is not UTF-8")?
        }
        (None, Some(json)) => json,
        (None, None) => "{}".to_string(),
    };
    let metadata: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&metadata_json)
            .map_err(|err| PtxError::MetadataJsonInvalid(err.to_string()))?;
    // Re-serialize so the embedded bytes are exactly what was hashed.
    let canonical_metadata = serde_json::to_string(&metadata)?;

    let (proof_envelope, commitment) = match &args.proof {
        Some(path) => {
            // Wrap an externally produced envelope; the commitment for the
            // anchor hint comes from its public signals.
            let data = std::fs::read(path)
                .with_context(|| format!("reading proof envelope {}", path.display()))?;
            let parsed = ProofEnvelope::parse(&data)?;
            let commitment = parsed
                .signals()
                .get(1)
                .and_then(|s| fr_from_decimal(s).ok());
            (data, commitment)
        }
        None => {
            let nullifier = match &args.nullifier {
                Some(value) => fr_from_decimal(value)?,
                None => {
                    let generated = random_secret();
                    println!("nullifier: {}", fr_to_decimal(&generated));
                    generated
                }
            };
            let secret = match &args.secret {
                Some(value) => fr_from_decimal(value)?,
                None => {
                    let generated = random_secret();
                    println!("secret:    {}", fr_to_decimal(&generated));
                    generated
                }
            };

            let witness = SdvWitness::derive(
                &domain,
                canonical_metadata.as_bytes(),
                args.trust_method,
                nullifier,
                secret,
            )?;
            info!(domain = %domain, trust_method = args.trust_method, "witness assembled");

            println!(
                "nullifier hash: {}",
                fr_to_decimal(&witness.signals.nullifier_hash)
            );
            let prover = Prover::new(KeyStore::in_working_dir());
            let envelope = prover.prove(&witness)?;
            (envelope, Some(witness.signals.commitment))
        }
    };

    let record = PtxRecord {
        trust_method: args.trust_method,
        proof: Some(ZkProof {
            proof_system: ProofSystem::Groth16 as i32,
            verification_key_id: VERIFICATION_KEY_ID.to_string(),
            proof_data: proof_envelope,
        }),
        signed_metadata: canonical_metadata.clone(),
        anchor: Some(Anchor::DohDetails(DohAnchor {
            domain_name: domain.clone(),
        })),
    };
    std::fs::write(&args.out, container::encode(&record))?;

    if let Some(commitment) = commitment {
        println!("commitment:     {}", fr_to_decimal(&commitment));
        println!("anchor TXT record:");
        println!("  host:    {}", hostname::derive(&commitment, &domain));
        println!(
            "  content: {}",
            metadata_digest_hex(canonical_metadata.as_bytes())
        );
    }
    println!("wrote {}", args.out.display());
    Ok(())
}

async fn run_verify(args: VerifyArgs, verbose: bool) -> Result<ExitCode> {
    let options = VerifyOptions {
        intended_scope: args.intended_scope,
        intended_audience: args.intended_audience,
        strict: args.strict,
        redis_url: args.redis_url,
        ..VerifyOptions::default()
    };
    let verifier = Verifier::new(options)?;

    let data = std::fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    if args.time_skip_dev {
        let report = verifier.verify_crypto_only(&data).await?;
        println!("{:.4}", 0.0);
        println!("{:.4}", report.proof_time.as_secs_f64());
        let ok = report.proof.is_passed();
        println!("{}", if ok { 1 } else { 0 });
        return Ok(exit_code(ok));
    }

    let report = match verifier.verify_bytes(&data).await {
        Ok(report) => report,
        Err(err) if args.time_dev => {
            println!("{:.4}", 0.0);
            println!("{:.4}", 0.0);
            println!("0");
            tracing::error!(error = %err, "verification aborted");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    if args.time_dev {
        println!("{:.4}", report.dns_time.as_secs_f64());
        println!("{:.4}", report.proof_time.as_secs_f64());
        println!("{}", if report.success() { 1 } else { 0 });
        return Ok(exit_code(report.success()));
    }

    print_report(&args.file.display().to_string(), &report, verbose);
    Ok(exit_code(report.success()))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn outcome_line(name: &str, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Passed => println!("  {name:<10} ok"),
        CheckOutcome::Skipped => println!("  {name:<10} skipped"),
        CheckOutcome::Failed(err) => println!("  {name:<10} FAILED  {err}"),
    }
}

fn print_report(path: &str, report: &VerificationReport, verbose: bool) {
    println!("PTX verification: {path}");
    outcome_line("expiry", &report.metadata.expiry);
    outcome_line("scope", &report.metadata.scope);
    outcome_line("audience", &report.metadata.audience);
    outcome_line("replay", &report.replay);
    outcome_line("dns", &report.dns);
    outcome_line("semantic", &report.semantic);
    outcome_line("proof", &report.proof);

    if verbose {
        let details = &report.details;
        println!("  --");
        if let Some(hostname) = &report.derived_hostname {
            println!("  anchor hostname:  {hostname}");
        }
        println!("  domain:           {}", details.domain);
        println!("  fqdn hash:        {}", details.fqdn_hash);
        println!("  metadata:         {}", details.metadata_json);
        println!("  metadata p1:      {}", details.metadata_hash_p1);
        println!("  metadata p2:      {}", details.metadata_hash_p2);
        println!("  trust method:     {}", details.trust_method);
        if let Some(nullifier_hash) = &details.nullifier_hash {
            println!("  nullifier hash:   {nullifier_hash}");
        }
        if let Some(commitment) = &details.commitment {
            println!("  commitment:       {commitment}");
        }
        println!(
            "  dns {:.1} ms, proof {:.1} ms",
            report.dns_time.as_secs_f64() * 1e3,
            report.proof_time.as_secs_f64() * 1e3
        );
    }

    if report.success() {
        println!("all checks passed");
    } else {
        println!("verification failed ({} error(s))", report.failures().len());
    }
}

/// Sanity used by `Cli::parse` paths in tests.
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verify_args_parse_csv_lists() {
        let cli = Cli::parse_from([
            "ptx",
            "verify",
            "token.ptx",
            "--intended-scope",
            "read,write",
            "--intended-audience",
            "svc-a",
            "--strict",
        ]);
        match cli.command {
            Command::Verify(args) => {
                assert_eq!(args.intended_scope, vec!["read", "write"]);
                assert_eq!(args.intended_audience, vec!["svc-a"]);
                assert!(args.strict);
            }
            _ => panic!("expected verify subcommand"),
        }
    }

    #[test]
    fn prove_args_accept_fqdn_alias() {
        let cli = Cli::parse_from(["ptx", "prove", "--fqdn", "example.com"]);
        match cli.command {
            Command::Prove(args) => {
                assert_eq!(args.fqdn.as_deref(), Some("example.com"));
                assert_eq!(args.trust_method, 1);
            }
            _ => panic!("expected prove subcommand"),
        }
    }
}
