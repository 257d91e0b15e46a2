/// Unique textual identifier for a screening compound.
/// Example: `TCMDC-123456`
pub type CompoundId = String;
/// Diagnostic label for a sheet grid, used in error messages and logs.
/// Examples: `inhibition.xlsx#Sheet1`, `potency_fixture`
pub type SheetId = String;
