//! The full design-system document.

use figtree_analysis::NamedTokens;

pub fn design_system(tokens: &NamedTokens) -> String {
    format!(
        "# DESIGN SYSTEM\n\
         \n\
         ## COLOR PALETTE\n\
         {colors}\n\
         \n\
         ## TYPOGRAPHY\n\
         {typography}\n\
         \n\
         ## SPACING SCALE\n\
         {spacing}\n\
         \n\
         ## RADIUS SCALE\n\
         {radius}\n\
         \n\
         ## HOW TO USE\n\
         Declare these tokens as CSS custom properties on :root and refer to\n\
         them by their semantic names everywhere.\n",
        colors = list(tokens.colors.iter()),
        typography = tokens
            .typography
            .iter()
            .map(|(name, typo)| {
                format!(
                    "- `{}`: {} {}px, weight {}",
                    name, typo.font_family, typo.font_size, typo.font_weight
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        spacing = list(tokens.spacing.iter()),
        radius = list(tokens.border_radius.iter()),
    )
}

fn list<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    entries
        .map(|(name, value)| format!("- `{}`: `{}`", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}
