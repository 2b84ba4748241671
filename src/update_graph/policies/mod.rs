mod risk_acceptance;

pub use risk_acceptance::RiskAcceptance;
