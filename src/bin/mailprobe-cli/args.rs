use std::time::Duration;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use mailprobe_lib::{DomainLabels, ProbeOptions, ResolverOptions, VerifyOptions};

#[derive(Parser)]
#[command(
    name = "mailprobe-cli",
    about = "Check e-mail domains via MX and probe recipients with an SMTP handshake."
)]
pub struct Cli {
    /// adresses e-mail à vérifier
    #[arg(required_unless_present = "stdin")]
    pub emails: Vec<String>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// timeout DNS en secondes
    #[arg(long = "dns-timeout", default_value = "3", value_parser = parse_seconds)]
    pub dns_timeout: Duration,

    /// timeout SMTP en secondes (connexion et chaque commande)
    #[arg(long = "smtp-timeout", default_value = "8", value_parser = parse_seconds)]
    pub smtp_timeout: Duration,

    /// port SMTP du serveur MX
    #[arg(long, default_value_t = 25)]
    pub port: u16,

    /// nom utilisé pour EHLO/HELO
    #[arg(long)]
    pub helo: Option<String>,

    /// enveloppe MAIL FROM (par défaut check@local.test)
    #[arg(long = "from")]
    pub mail_from: Option<String>,

    /// format: table|json|ndjson|csv
    #[arg(long, default_value = "table")]
    pub format: String,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// libellés du statut de domaine: en|ru
    #[arg(long, default_value = "ru")]
    pub lang: String,

    /// verbosité des logs sur stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn verify_options(&self) -> VerifyOptions {
        let mut probe = ProbeOptions {
            port: self.port,
            timeout: self.smtp_timeout,
            ..ProbeOptions::default()
        };
        if let Some(helo) = &self.helo {
            probe.helo_domain = helo.clone();
        }
        if let Some(mail_from) = &self.mail_from {
            probe.mail_from = mail_from.clone();
        }
        VerifyOptions {
            resolver: ResolverOptions {
                timeout: self.dns_timeout,
                ..ResolverOptions::default()
            },
            probe,
        }
    }

    pub fn labels(&self) -> Result<DomainLabels> {
        labels_from_str(&self.lang)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "mailprobe_lib=info,warn",
            _ => "mailprobe_lib=debug,info",
        }
    }
}

pub fn labels_from_str(s: &str) -> Result<DomainLabels> {
    match s {
        "en" => Ok(DomainLabels::english()),
        "ru" => Ok(DomainLabels::russian()),
        other => bail!("unknown --lang '{other}', use: en|ru"),
    }
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|err| format!("invalid number of seconds '{s}': {err}"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{s}'"));
    }
    Ok(Duration::from_secs_f64(secs))
}
