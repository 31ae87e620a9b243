// ABOUTME: Template repetition over fixed enumerations
// ABOUTME: Implements %% and %(key)s substitution used to expand rows and option lists

use super::error::{Result, SheetError};

/// Separator placed between repeated instances
pub const INSTANCE_SEPARATOR: &str = "\n";

/// Items a template is repeated over
#[derive(Debug, Clone)]
pub enum RepeatSource<'a> {
    /// Each value replaces every `%%` in the template
    Values(Vec<String>),
    /// Each item fills `%(key)s`, and its capitalized form fills `%(Key)s`
    Named { items: &'a [&'a str], key: &'a str },
    /// Each row is zipped with the keys, one `%(key)s` per column
    Tuples {
        rows: Vec<Vec<String>>,
        keys: &'a [&'a str],
    },
}

impl RepeatSource<'_> {
    /// Build a `Values` source from anything displayable, typically a range
    pub fn values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        RepeatSource::Values(values.into_iter().map(|v| v.to_string()).collect())
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Replace every `%(key)s` in the template with the value paired to `key`
pub fn substitute(template: &str, pairs: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find(")s") else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let key = &after[..end];
        let value = pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| SheetError::MissingKey {
                key: key.to_string(),
            })?;
        out.push_str(value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Instantiate the template once per item of the source and join the instances
pub fn repeat_template(template: &str, source: &RepeatSource<'_>) -> Result<String> {
    let instances: Vec<String> = match source {
        RepeatSource::Values(values) => values
            .iter()
            .map(|value| template.replace("%%", value))
            .collect(),
        RepeatSource::Named { items, key } => {
            let capitalized_key = capitalize(key);
            items
                .iter()
                .map(|item| {
                    let capitalized = capitalize(item);
                    substitute(
                        template,
                        &[
                            (*key, *item),
                            (capitalized_key.as_str(), capitalized.as_str()),
                        ],
                    )
                })
                .collect::<Result<_>>()?
        }
        RepeatSource::Tuples { rows, keys } => rows
            .iter()
            .map(|row| {
                if row.len() != keys.len() {
                    return Err(SheetError::ArityMismatch {
                        expected: keys.len(),
                        found: row.len(),
                    });
                }
                let pairs: Vec<(&str, &str)> = keys
                    .iter()
                    .copied()
                    .zip(row.iter().map(String::as_str))
                    .collect();
                substitute(template, &pairs)
            })
            .collect::<Result<_>>()?,
    };

    Ok(instances.join(INSTANCE_SEPARATOR))
}

/// Rows of `[index, item, transform(item)...]`, numbered from `start`
pub fn enumerate_helper(
    items: &[&str],
    transforms: &[fn(&str) -> String],
    start: usize,
) -> Vec<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut row = vec![(i + start).to_string(), item.to_string()];
            row.extend(transforms.iter().map(|transform| transform(item)));
            row
        })
        .collect()
}
