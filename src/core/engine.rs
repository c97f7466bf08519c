use super::types::{
    ComparisonResult, ComparisonSummary, CostBreakdown, LoanResult, OwnershipCostResult,
    VehicleFinancialInputs, VehicleProfile, VehicleUsageInputs,
};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Tax is charged on the full price; the trade-in only reduces what is
/// financed. Cash beyond the upfront cost is dropped, not refunded.
/// `loan_term_months` must be positive.
pub fn amortize(inputs: &VehicleFinancialInputs) -> LoanResult {
    let tax_amount = inputs.price * inputs.sales_tax_rate / 100.0;
    let total_upfront_cost = inputs.price + tax_amount + inputs.fees;
    let loan_principal = total_upfront_cost - inputs.down_payment - inputs.trade_in;

    if loan_principal <= 0.0 {
        return LoanResult {
            tax_amount,
            loan_amount: 0.0,
            monthly_payment: 0.0,
            total_interest: 0.0,
            total_cost_with_interest: total_upfront_cost,
        };
    }

    let months = inputs.loan_term_months as f64;
    let monthly_payment = monthly_payment(loan_principal, inputs.interest_rate, months);
    let total_interest = monthly_payment * months - loan_principal;

    LoanResult {
        tax_amount,
        loan_amount: loan_principal,
        monthly_payment,
        total_interest,
        total_cost_with_interest: total_upfront_cost + total_interest,
    }
}

fn monthly_payment(principal: f64, annual_rate_pct: f64, months: f64) -> f64 {
    if annual_rate_pct == 0.0 {
        return principal / months;
    }

    let r = annual_rate_pct / 100.0 / MONTHS_PER_YEAR;
    let growth = (1.0 + r).powf(months);
    principal * r * growth / (growth - 1.0)
}

/// Loan payments stop at the end of the term or the horizon, whichever is first.
pub fn aggregate(inputs: &VehicleUsageInputs, monthly_payment: f64) -> OwnershipCostResult {
    let miles_per_month = inputs.miles_per_year / MONTHS_PER_YEAR;
    let fuel_monthly = (miles_per_month / inputs.mpg) * inputs.gas_price;
    let insurance_monthly = inputs.insurance_monthly;
    let maintenance_monthly = inputs.maintenance_yearly / MONTHS_PER_YEAR;

    let total_monthly = monthly_payment + fuel_monthly + insurance_monthly + maintenance_monthly;

    let horizon_months = MONTHS_PER_YEAR * inputs.ownership_years;
    let total_loan_payments_for_duration = if monthly_payment > 0.0 {
        monthly_payment * (inputs.loan_term_months as f64).min(horizon_months)
    } else {
        0.0
    };

    OwnershipCostResult {
        fuel_monthly,
        insurance_monthly,
        maintenance_monthly,
        total_monthly,
        total_annual: total_monthly * MONTHS_PER_YEAR,
        total_fuel_cost: fuel_monthly * MONTHS_PER_YEAR * inputs.ownership_years,
        total_insurance_cost: insurance_monthly * MONTHS_PER_YEAR * inputs.ownership_years,
        total_maintenance_cost: maintenance_monthly * MONTHS_PER_YEAR * inputs.ownership_years,
        total_loan_payments_for_duration,
        ownership_years: inputs.ownership_years,
    }
}

// Trade-in, tax and fees are already inside the principal or down payment.
pub fn assemble(
    profile: &VehicleProfile,
    loan: LoanResult,
    costs: OwnershipCostResult,
) -> ComparisonResult {
    let breakdown = CostBreakdown {
        down_payment: profile.down_payment,
        loan_cost: costs.total_loan_payments_for_duration,
        fuel: costs.total_fuel_cost,
        insurance: costs.total_insurance_cost,
        maintenance: costs.total_maintenance_cost,
    };

    ComparisonResult {
        name: profile.name.clone(),
        loan,
        costs,
        total_ownership_cost: breakdown.total(),
        breakdown,
    }
}

pub fn compare_vehicle(profile: &VehicleProfile) -> ComparisonResult {
    let loan = amortize(&profile.financial_inputs());
    let costs = aggregate(&profile.usage_inputs(), loan.monthly_payment);
    assemble(profile, loan, costs)
}

pub fn compare_vehicles(profiles: &[VehicleProfile]) -> ComparisonSummary {
    let results: Vec<ComparisonResult> = profiles.iter().map(compare_vehicle).collect();

    let mut cheapest: Option<(usize, f64)> = None;
    let mut most_expensive: Option<f64> = None;
    let mut finite_count = 0usize;
    for (idx, result) in results.iter().enumerate() {
        let total = result.total_ownership_cost;
        if !total.is_finite() {
            continue;
        }
        finite_count += 1;
        if cheapest.is_none_or(|(_, best)| total < best) {
            cheapest = Some((idx, total));
        }
        if most_expensive.is_none_or(|worst| total > worst) {
            most_expensive = Some(total);
        }
    }

    let savings_vs_most_expensive = match (cheapest, most_expensive) {
        (Some((_, low)), Some(high)) if finite_count >= 2 => high - low,
        _ => 0.0,
    };

    ComparisonSummary {
        results,
        cheapest_index: cheapest.map(|(idx, _)| idx),
        savings_vs_most_expensive,
    }
}
