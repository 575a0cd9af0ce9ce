use chrono::Datelike;
use clap::Parser;
use rota_gen::core::emails::send_rota;
use rota_gen::domain::ports::ConfigProvider;
use rota_gen::utils::{logger, validation::Validate};
use rota_gen::{FileOutbox, RotaGenerator, RotaMonth, TomlConfig};

#[derive(Parser)]
#[command(name = "rota-gen")]
#[command(about = "Generate the monthly directors rota from the roster workbook")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "rota-config.toml")]
    config: String,

    /// Rota month as YYYY-MM (defaults to the current month)
    #[arg(short, long)]
    month: Option<String>,

    /// Override the send_emails setting from config
    #[arg(long)]
    send: Option<bool>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting directors rota generator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置；檔案不存在時使用預設值
    let mut config = match TomlConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(send) = args.send {
        config.email.send_emails = send;
        tracing::info!("🔧 send_emails overridden to: {}", send);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let month = match rota_month(args.month.as_deref()) {
        Ok(month) => month,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("📅 Generating rota for {}", month);

    warn_invalid_paths(&config);

    let send_emails = config.email.send_emails;
    let sender = config.email.sender.clone();
    let subject = config.email.subject.clone();
    let outbox_dir = config.email.outbox_dir.clone();

    let generator = RotaGenerator::new(config);
    let outcome = match generator.generate(month).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Rota generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    println!("{}", outcome.email_text);

    if send_emails {
        if sender.is_empty() {
            tracing::warn!("Email sender not configured; rota printed only");
        } else {
            let outbox = FileOutbox::new(outbox_dir);
            match send_rota(&outbox, &subject, &outcome.email_text, &outcome.directors).await {
                Ok(sent) => tracing::info!("✅ {} emails written to the outbox", sent),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn rota_month(arg: Option<&str>) -> rota_gen::Result<RotaMonth> {
    match arg {
        Some(value) => value.parse(),
        None => {
            let today = chrono::Local::now().date_naive();
            Ok(RotaMonth {
                year: today.year(),
                month: today.month(),
            })
        }
    }
}

// Warn up front when the configured workbook or template path points nowhere.
fn warn_invalid_paths<C: ConfigProvider>(config: &C) {
    let workbook = config.workbook_path();
    let template = config.email_template();
    match (workbook.is_file(), template.is_file()) {
        (false, false) => tracing::warn!("Rota workbook and email template not valid"),
        (false, true) => tracing::warn!("Rota workbook not valid: {}", workbook.display()),
        (true, false) => tracing::warn!("Email template not valid: {}", template.display()),
        (true, true) => {}
    }
}
