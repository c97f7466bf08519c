mod engine;
mod types;

pub use engine::{aggregate, amortize, assemble, compare_vehicle, compare_vehicles};
pub use types::{
    ComparisonResult, ComparisonSummary, CostBreakdown, LoanResult, OwnershipCostResult,
    VehicleFinancialInputs, VehicleProfile, VehicleUsageInputs,
};
