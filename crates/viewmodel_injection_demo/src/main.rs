//! Drives a counter screen from the command line, printing the label and the
//! decrement control after every step.

mod cmd_args;
mod script;

use anyhow::{Context, Result};
use cmd_args::CommandLineArgs;
use script::Step;
use tracing_subscriber::EnvFilter;
use viewmodel_injection::{
    ControlEvent, CounterPresenter, CounterWidgets, FactorySupplier,
    PresenterHandle,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let steps = script::parse(args.taps()).context("invalid tap script")?;

    let mut presenter = PresenterHandle::construct(
        args.count(),
        FactorySupplier::default_for(args.variant(), args.policy()),
    );
    let widgets = CounterWidgets::new();
    presenter
        .attach(widgets.clone())
        .context("failed to attach widgets")?;

    println!(
        "{} presenter, {} policy",
        presenter.variant(),
        args.policy()
    );
    println!("start {}", describe(&widgets));

    for step in steps {
        let delivered = perform(&widgets, step, args.programmatic());
        let ignored = if delivered { "" } else { " (ignored)" };
        println!("{step}{ignored} {}", describe(&widgets));
    }

    presenter.detach();
    Ok(())
}

/// Returns whether the step reached the view-model.
fn perform(widgets: &CounterWidgets, step: Step, programmatic: bool) -> bool {
    let control = match step {
        Step::Increment => &widgets.increment,
        Step::Decrement => &widgets.decrement,
    };

    if programmatic {
        control.send_actions(ControlEvent::TouchUpInside);
        true
    } else {
        control.tap()
    }
}

fn describe(widgets: &CounterWidgets) -> String {
    let text = widgets.count_label.text().unwrap_or_default();
    let decrement = if widgets.decrement.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    format!("label={text} decrement={decrement}")
}

#[cfg(test)]
mod test {
    use super::*;
    use viewmodel_injection::{DecrementPolicy, Variant};

    fn attached(
        count: i64,
        policy: DecrementPolicy,
    ) -> (PresenterHandle, CounterWidgets) {
        let mut presenter = PresenterHandle::construct(
            count,
            FactorySupplier::default_for(Variant::Typed, policy),
        );
        let widgets = CounterWidgets::new();
        presenter.attach(widgets.clone()).unwrap();
        (presenter, widgets)
    }

    #[test]
    fn test_describe_initial_state() {
        let (_presenter, widgets) = attached(0, DecrementPolicy::TrustControl);
        assert_eq!(describe(&widgets), "label=0 decrement=disabled");
    }

    #[test]
    fn test_tap_on_disabled_decrement_is_ignored() {
        let (_presenter, widgets) = attached(0, DecrementPolicy::TrustControl);
        assert!(!perform(&widgets, Step::Decrement, false));
        assert_eq!(describe(&widgets), "label=0 decrement=disabled");
    }

    #[test]
    fn test_programmatic_decrement_goes_negative() {
        let (_presenter, widgets) = attached(0, DecrementPolicy::TrustControl);
        assert!(perform(&widgets, Step::Decrement, true));
        assert_eq!(describe(&widgets), "label=-1 decrement=disabled");
    }

    #[test]
    fn test_programmatic_decrement_with_floor() {
        let (_presenter, widgets) = attached(0, DecrementPolicy::FloorAtZero);
        perform(&widgets, Step::Decrement, true);
        perform(&widgets, Step::Increment, true);
        assert_eq!(describe(&widgets), "label=1 decrement=enabled");
    }
}
