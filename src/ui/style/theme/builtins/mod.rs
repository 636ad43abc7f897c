mod light;
mod slate;
mod solarized;

use super::types::ThemeDefinition;

pub(super) const DEFAULT: ThemeDefinition = slate::DEFINITION;

pub(super) const DEFINITIONS: &[ThemeDefinition] = &[
	slate::DEFINITION,
	solarized::DEFINITION,
	light::DEFINITION,
];
