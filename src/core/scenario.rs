use super::types::{InterventionSet, MonthlyBand, RoiResult};

pub const ASSUMED_REVENUE: f64 = 80_000.0;
pub const MAX_MONTHLY_IMPROVEMENT_MM: f64 = 200.0;
pub const LIKELY_IMPROVEMENT_FACTOR: f64 = 0.8;

// Later months are credited with a larger share of the saving. Labels match exactly.
pub const SEASONAL_MULTIPLIERS: &[(&str, f64)] = &[("Jun", 1.0), ("Jul", 2.0)];
pub const DEFAULT_SEASONAL_MULTIPLIER: f64 = 3.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Intervention {
    Drip,
    Mulch,
}

impl Intervention {
    pub const ALL: [Intervention; 2] = [Intervention::Drip, Intervention::Mulch];

    pub fn cost(self) -> f64 {
        match self {
            Intervention::Drip => 20_000.0,
            Intervention::Mulch => 5_000.0,
        }
    }

    pub fn water_saving(self) -> f64 {
        match self {
            Intervention::Drip => 0.4,
            Intervention::Mulch => 0.2,
        }
    }
}

impl InterventionSet {
    pub fn is_active(self, intervention: Intervention) -> bool {
        match intervention {
            Intervention::Drip => self.drip,
            Intervention::Mulch => self.mulch,
        }
    }

    pub fn active(self) -> impl Iterator<Item = Intervention> {
        Intervention::ALL
            .into_iter()
            .filter(move |intervention| self.is_active(*intervention))
    }

    // Not capped at 1.0.
    pub fn savings_fraction(self) -> f64 {
        self.active()
            .fold(0.0, |acc, intervention| acc + intervention.water_saving())
    }

    pub fn total_cost(self) -> f64 {
        self.active()
            .fold(0.0, |acc, intervention| acc + intervention.cost())
    }
}

pub fn compute_roi(interventions: InterventionSet) -> RoiResult {
    let cost = interventions.total_cost();
    RoiResult {
        cost,
        profit: ASSUMED_REVENUE - cost,
        savings_fraction: interventions.savings_fraction(),
    }
}

pub fn seasonal_multiplier(month: &str) -> f64 {
    SEASONAL_MULTIPLIERS
        .iter()
        .find(|(label, _)| *label == month)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(DEFAULT_SEASONAL_MULTIPLIER)
}

pub fn adjust_scenarios(forecast: &[MonthlyBand], interventions: InterventionSet) -> Vec<MonthlyBand> {
    let improvement = MAX_MONTHLY_IMPROVEMENT_MM * interventions.savings_fraction();
    forecast
        .iter()
        .map(|band| MonthlyBand {
            month: band.month.clone(),
            best: band.best,
            likely: capped(
                band.likely + improvement * LIKELY_IMPROVEMENT_FACTOR,
                band.best,
            ),
            worst: capped(
                band.worst + improvement * seasonal_multiplier(&band.month),
                band.best,
            ),
        })
        .collect()
}

// f64::min discards a NaN operand; a missing reading must stay NaN instead.
fn capped(value: f64, ceiling: f64) -> f64 {
    if value.is_nan() || ceiling.is_nan() {
        f64::NAN
    } else {
        value.min(ceiling)
    }
}
