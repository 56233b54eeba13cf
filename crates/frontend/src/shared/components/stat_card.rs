use crate::shared::components::table::{format_money, format_number_int, format_number_with_decimals};
use crate::shared::icons::icon;
use contracts::shared::indicators::{Indicator, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format!("{}{}", currency, format_money(val)),
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(val, *decimals))
        }
        ValueFormat::Integer => format_number_int(val),
    }
}

fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    }
}

#[component]
pub fn StatCard(
    /// Computed indicator to display
    indicator: Indicator,
) -> impl IntoView {
    let formatted = format_value(indicator.value, &indicator.format);

    view! {
        <div class=status_class(indicator.status)>
            <div class="stat-card__icon">
                {icon(&indicator.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{indicator.label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let money = ValueFormat::Money {
            currency: "$".into(),
        };
        assert_eq!(format_value(1550.5, &money), "$1,550.50");
        assert_eq!(format_value(12.345, &ValueFormat::Percent { decimals: 1 }), "12.3%");
        assert_eq!(format_value(1200.0, &ValueFormat::Integer), "1,200");
        assert_eq!(format_value(7.0, &ValueFormat::Number { decimals: 0 }), "7");
    }
}
