mod scenarios;
mod validation;
