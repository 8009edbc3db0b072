use std::ffi::OsString;
use viewmodel_injection::{DecrementPolicy, Variant};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// How the presenter is given its view-model.
    #[arg(
        short = 'v',
        long,
        default_value_t = Variant::Tuple,
        help = "injection variant (tuple, typed or factory)"
    )]
    variant: Variant,

    /// The count shown before any interaction.
    #[arg(
        short = 'c',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "initial count"
    )]
    count: i64,

    /// Steps to perform: '+' taps increment, '-' taps decrement. Whitespace
    /// is ignored.
    #[arg(
        short = 't',
        long,
        default_value = "",
        allow_hyphen_values = true,
        help = "tap script"
    )]
    taps: String,

    /// Send events straight to the controls' targets, even when a control is
    /// disabled.
    #[arg(long, help = "bypass disabled controls")]
    programmatic: bool,

    /// Ignore decrements once the count reaches zero.
    #[arg(long, help = "never decrement below zero")]
    floor_at_zero: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    variant: Variant,
    count: i64,
    taps: String,
    programmatic: bool,
    policy: DecrementPolicy,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        let policy = if args.floor_at_zero {
            DecrementPolicy::FloorAtZero
        } else {
            DecrementPolicy::TrustControl
        };

        Self {
            variant: args.variant,
            count: args.count,
            taps: args.taps,
            programmatic: args.programmatic,
            policy,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    #[allow(dead_code)]
    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn taps(&self) -> &str {
        &self.taps
    }

    pub fn programmatic(&self) -> bool {
        self.programmatic
    }

    pub fn policy(&self) -> DecrementPolicy {
        self.policy
    }
}
