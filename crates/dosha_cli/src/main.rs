use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dosha_engine::{
    ALL_ACTIVITY, ALL_BODY_FRAMES, ALL_DIET, ALL_DOSHAS, ALL_SKIN_TYPES, ALL_SLEEP, ALL_STRESS,
    Activity, Assessment, BodyFrame, BodyPartRisk, Condition, Diet, DoshaLevels, OverallStatus,
    SkinType, Sleep, Stress, assess, classify_risk, derive_body_part_risks, dosha_risks,
    lookup_condition_name, weights,
};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

mod profile;

use profile::Profile;

#[derive(Parser)]
#[command(name = "dosha", version, about = "Dosha risk engine CLI")]
struct Cli {
    /// Logging verbosity (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute dosha levels and affected regions for a lifestyle profile
    Assess {
        /// JSON lifestyle profile; flags override its fields
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Sleep duration (<4h, 5-6h, 7-8h, >9h)
        #[arg(long, allow_hyphen_values = true)]
        sleep: Option<Sleep>,
        /// Stress level (VeryLow, Low, Moderate, High, Extreme)
        #[arg(long)]
        stress: Option<Stress>,
        /// Activity level (Sedentary, LightActive, Active, Athlete)
        #[arg(long)]
        activity: Option<Activity>,
        /// Diet quality (Processed, Mixed, HomeCooked)
        #[arg(long)]
        diet: Option<Diet>,
        /// Body frame (Petite, Medium, Heavy)
        #[arg(long)]
        body_frame: Option<BodyFrame>,
        /// Skin type (DryRough, OilySensitive, SoftMoist)
        #[arg(long)]
        skin_type: Option<SkinType>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify a single percentage into a risk tier
    Classify {
        /// Percentage in 0..=100
        #[arg(allow_hyphen_values = true)]
        percent: i32,
    },
    /// Derive affected regions for an explicit dosha split
    Regions {
        #[arg(long)]
        vata: u8,
        #[arg(long)]
        pitta: u8,
        #[arg(long)]
        kapha: u8,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the condition and remedies for a body region
    Remedy {
        /// Region name (head, chest, stomach, joints)
        region: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print every lifestyle weight table
    Weights,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("dosha v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Assess {
            profile,
            sleep,
            stress,
            activity,
            diet,
            body_frame,
            skin_type,
            json,
        } => {
            let base = match profile {
                Some(path) => Profile::load(&path)?,
                None => Profile::default(),
            };
            let flags = Profile {
                sleep,
                stress,
                activity,
                diet,
                body_frame,
                skin_type,
            };
            let inputs = base.overlay(flags).resolve();
            debug!(?inputs, "resolved lifestyle inputs");

            let assessment = assess(&inputs);
            info!(
                vata = assessment.levels.vata(),
                pitta = assessment.levels.pitta(),
                kapha = assessment.levels.kapha(),
                regions = assessment.body_part_risks.len(),
                status = assessment.status.label(),
                "assessment complete"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print_assessment(&assessment);
            }
        }

        Commands::Classify { percent } => {
            let level = classify_risk(percent).with_context(|| format!("percent {percent}"))?;
            println!("{percent}% - {}", level.name());
        }

        Commands::Regions {
            vata,
            pitta,
            kapha,
            json,
        } => {
            let levels = DoshaLevels::new(vata, pitta, kapha)?;
            let risks = derive_body_part_risks(&levels);
            if json {
                println!("{}", serde_json::to_string_pretty(&risks)?);
            } else {
                print_levels(&levels);
                print_risks(&risks);
            }
        }

        Commands::Remedy { region, json } => {
            let condition = lookup_condition_name(&region)?;
            if json {
                println!("{}", serde_json::to_string_pretty(condition)?);
            } else {
                print_condition(condition);
            }
        }

        Commands::Weights => print_weights(),
    }

    Ok(())
}

fn print_assessment(a: &Assessment) {
    println!(
        "Raw: vata {}, pitta {}, kapha {} (total {})",
        a.raw.vata,
        a.raw.pitta,
        a.raw.kapha,
        a.raw.total()
    );
    print_levels(&a.levels);
    print_risks(&a.body_part_risks);
}

fn print_levels(levels: &DoshaLevels) {
    let tiers = dosha_risks(levels);
    for dosha in ALL_DOSHAS {
        println!(
            "{:<6} ({:<5}) {:>3}%  {}",
            dosha.name(),
            dosha.element(),
            levels.get(dosha),
            tiers[dosha.index() as usize].name()
        );
    }
    println!("Total: {}%", levels.total());
}

fn print_risks(risks: &[BodyPartRisk]) {
    if risks.is_empty() {
        println!("Affected regions: none");
    } else {
        println!("Affected regions:");
        for r in risks {
            println!(
                "  {:<8} {:<8} {} ({})",
                r.part.name(),
                r.level.name(),
                r.condition,
                r.dosha.name()
            );
        }
    }
    println!("Status: {}", OverallStatus::from_risks(risks).label());
}

fn print_condition(c: &Condition) {
    println!("{} - {} ({})", c.part.name(), c.name, c.dosha.name());
    println!("  Diet:   {}", c.remedy.diet);
    println!("  Yoga:   {}", c.remedy.yoga);
    println!("  Remedy: {}", c.remedy.herb);
}

fn print_weights() {
    println!("sleep -> vata / kapha");
    for s in ALL_SLEEP {
        println!(
            "  {:<6} {:>3} {:>3}",
            s.token(),
            weights::sleep_vata_weight(s),
            weights::sleep_kapha_weight(s)
        );
    }
    println!("stress -> vata / pitta");
    for s in ALL_STRESS {
        println!(
            "  {:<8} {:>3} {:>3}",
            s.token(),
            weights::stress_vata_weight(s),
            weights::stress_pitta_weight(s)
        );
    }
    println!("activity -> kapha");
    for a in ALL_ACTIVITY {
        println!("  {:<11} {:>3}", a.token(), weights::activity_kapha_weight(a));
    }
    println!("diet -> pitta");
    for d in ALL_DIET {
        println!("  {:<10} {:>3}", d.token(), weights::diet_pitta_weight(d));
    }
    println!("body frame -> kapha");
    for b in ALL_BODY_FRAMES {
        println!("  {:<6} {:>3}", b.token(), weights::body_frame_kapha_weight(b));
    }
    println!("skin type -> vata / pitta");
    for s in ALL_SKIN_TYPES {
        println!(
            "  {:<13} {:>3} {:>3}",
            s.token(),
            weights::skin_vata_weight(s),
            weights::skin_pitta_weight(s)
        );
    }
}
