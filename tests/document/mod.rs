mod tests_properties;
mod tests_roundtrip;
mod tests_scenarios;
