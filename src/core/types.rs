use serde::Serialize;

// Rates are percentages: `6.5` means 6.5% per year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub name: String,
    pub price: f64,
    pub sales_tax_rate: f64,
    pub fees: f64,
    pub down_payment: f64,
    pub trade_in: f64,
    pub interest_rate: f64,
    pub loan_term_months: u32,
    pub miles_per_year: f64,
    pub mpg: f64,
    pub gas_price: f64,
    pub insurance_monthly: f64,
    pub maintenance_yearly: f64,
    pub ownership_years: f64,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            name: "Vehicle 1".to_string(),
            price: 30_000.0,
            sales_tax_rate: 7.0,
            fees: 500.0,
            down_payment: 5_000.0,
            trade_in: 0.0,
            interest_rate: 6.5,
            loan_term_months: 60,
            miles_per_year: 12_000.0,
            mpg: 25.0,
            gas_price: 3.50,
            insurance_monthly: 120.0,
            maintenance_yearly: 800.0,
            ownership_years: 5.0,
        }
    }
}

impl VehicleProfile {
    pub fn numbered_default(index: usize) -> VehicleProfile {
        match index {
            0 => VehicleProfile::default(),
            1 => VehicleProfile {
                name: "Vehicle 2".to_string(),
                price: 35_000.0,
                ..VehicleProfile::default()
            },
            n => VehicleProfile {
                name: format!("Vehicle {}", n + 1),
                ..VehicleProfile::default()
            },
        }
    }

    pub fn default_pair() -> Vec<VehicleProfile> {
        vec![Self::numbered_default(0), Self::numbered_default(1)]
    }

    pub fn financial_inputs(&self) -> VehicleFinancialInputs {
        VehicleFinancialInputs {
            price: self.price,
            sales_tax_rate: self.sales_tax_rate,
            fees: self.fees,
            down_payment: self.down_payment,
            trade_in: self.trade_in,
            interest_rate: self.interest_rate,
            loan_term_months: self.loan_term_months,
        }
    }

    pub fn usage_inputs(&self) -> VehicleUsageInputs {
        VehicleUsageInputs {
            miles_per_year: self.miles_per_year,
            mpg: self.mpg,
            gas_price: self.gas_price,
            insurance_monthly: self.insurance_monthly,
            maintenance_yearly: self.maintenance_yearly,
            loan_term_months: self.loan_term_months,
            ownership_years: self.ownership_years,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFinancialInputs {
    pub price: f64,
    pub sales_tax_rate: f64,
    pub fees: f64,
    pub down_payment: f64,
    pub trade_in: f64,
    pub interest_rate: f64,
    pub loan_term_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleUsageInputs {
    pub miles_per_year: f64,
    pub mpg: f64,
    pub gas_price: f64,
    pub insurance_monthly: f64,
    pub maintenance_yearly: f64,
    pub loan_term_months: u32,
    pub ownership_years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub tax_amount: f64,
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost_with_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipCostResult {
    pub fuel_monthly: f64,
    pub insurance_monthly: f64,
    pub maintenance_monthly: f64,
    pub total_monthly: f64,
    pub total_annual: f64,
    pub total_fuel_cost: f64,
    pub total_insurance_cost: f64,
    pub total_maintenance_cost: f64,
    pub total_loan_payments_for_duration: f64,
    pub ownership_years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub down_payment: f64,
    pub loan_cost: f64,
    pub fuel: f64,
    pub insurance: f64,
    pub maintenance: f64,
}

impl CostBreakdown {
    pub fn total(self) -> f64 {
        self.down_payment + self.loan_cost + self.fuel + self.insurance + self.maintenance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub name: String,
    pub loan: LoanResult,
    pub costs: OwnershipCostResult,
    pub total_ownership_cost: f64,
    pub breakdown: CostBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub results: Vec<ComparisonResult>,
    pub cheapest_index: Option<usize>,
    pub savings_vs_most_expensive: f64,
}
