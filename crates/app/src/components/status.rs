use dioxus::prelude::*;
use shared_types::StatusTone;
use shared_ui::{Badge, BadgeVariant};

/// Badge colour for a record status tone.
pub fn tone_variant(tone: StatusTone) -> BadgeVariant {
    match tone {
        StatusTone::Positive => BadgeVariant::Success,
        StatusTone::Pending => BadgeVariant::Info,
        StatusTone::Attention => BadgeVariant::Warning,
        StatusTone::Critical => BadgeVariant::Destructive,
        StatusTone::Neutral => BadgeVariant::Secondary,
    }
}

#[component]
pub fn StatusBadge(label: &'static str, tone: StatusTone) -> Element {
    rsx! {
        Badge { variant: tone_variant(tone), "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn critical_statuses_are_destructive() {
        assert_eq!(tone_variant(StatusTone::Critical), BadgeVariant::Destructive);
        assert_eq!(tone_variant(StatusTone::Positive), BadgeVariant::Success);
    }
}
