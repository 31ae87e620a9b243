// ABOUTME: Table rows and option lists of the sheet
// ABOUTME: Personality traits, reputations, characteristics, and the hermetic arts tables

use super::data::{CHARACTERISTICS, FORMS, FORMS_FIRST_COLUMN, TECHNIQUES};
use super::error::Result;
use super::repeat::{capitalize, enumerate_helper, repeat_template, RepeatSource};
use super::widgets::{xp, XpSuffixes};

/// Number of personality trait and reputation rows
pub const FREE_ROWS: usize = 6;

const PERSONALITY_TRAIT_ROW: &str = r#"<tr>
    <td><input type="text" class="sheet-heading_2" style="width:245px" name="attr_Personality_Trait%%"/></td>
    <td><input type="text" class="sheet-number_1" style="width:70px;" name="attr_Personality_Trait%%_score"/></td>
    <td><div class="sheet-flex-container">
        <button type="roll" class="sheet-button sheet-simple-roll" name="roll_personality%%_simple" value="&{template:generic} {{Banner=^{personality} ^{roll}}} {{Label=@{Personality_Trait%%}}} {{Result=[[@{simple-die} + [[@{Personality_Trait%%_Score}]] [@{Personality_Trait%%}] + (?{@{circumstantial_i18n}|0}) [@{circumstances_i18n}] ]]}} "></button>
        <button type="roll" class="sheet-button sheet-stress-roll" name="roll_personality%%_stress" value="&{template:generic} {{Banner=^{personality} ^{roll}}} {{Label=@{Personality_Trait%%}}} {{Result=[[@{stress-die} + [[@{Personality_Trait%%_Score}]] [@{Personality_Trait%%}] + (?{@{circumstantial_i18n}|0}) [@{circumstances_i18n}] ]]}} {{stress=1}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}"></button>
    </div></td>
</tr>"#;

const REPUTATION_ROW: &str = r#"<tr>
    <td><input type="text" class="sheet-heading_2" name="attr_Reputations%%"/></td>
    <td><input type="text" class="sheet-heading_2a" name="attr_Reputations%%_type"/></td>
    <td><input type="text" class="sheet-number_1" style="width:50px;" name="attr_Reputations%%_score"/></td>
    <td><div class="sheet-flex-container">
        <button type="roll" class="sheet-button sheet-simple-roll" name="roll_reputation%%_simple" value="&{template:generic} {{Banner=^{reputation} ^{roll}}} {{Label=@{Reputations%%}}} {{Result=[[@{simple-die} + [[@{Reputations%%_Score}]] [@{Reputations%%}] + (?{@{circumstantial_i18n}|0}) [@{circumstances_i18n}] ]] }}"></button>
        <button type="roll" class="sheet-button sheet-stress-roll" name="roll_reputation%%_stress" value="&{template:generic} {{Banner=^{reputation} ^{roll}}} {{Label=@{Reputations%%}}} {{Result=[[@{stress-die} + [[@{Reputations%%_Score}]] [@{Reputations%%}] + (?{@{circumstantial_i18n}|0}) [@{circumstances_i18n}]]] }} {{stress=1}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}"></button>
    </div></td>
</tr>"#;

/// Score, wounds, fatigue and circumstances of a characteristic roll
pub const CHARACTERISTIC_ROLL: &str = "(@{%(Char)s_Score}) [@{%(char)s_i18n}] + (@{wound_total}) [@{wounds_i18n}] + ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (?{@{circumstantial_i18n}|0}) [@{circumstances_i18n}]";

const CHARACTERISTIC_ROW: &str = r#"<tr>
    <th data-i18n="%(char)s" >%(Char)s</th>
    <td><input type="text" class="sheet-heading_2" name="attr_%(Char)s_Description"/></td>
    <td><input type="text" class="sheet-number_1" name="attr_%(Char)s_Score" value="0"/></td>
    <td><input type="text" class="sheet-number_1" name="attr_%(Char)s_Aging" value="0"/></td>
    <td><div class="sheet-flex-container">
        <button type="roll" class="sheet-button sheet-simple-roll" name="roll_%(Char)s_simple" value="&{template:ability} {{name= @{character_name}}} {{label0=^{%(char)s}}} {{banner=@{%(Char)s_Description}}} {{label1=^{score}}} {{result1=@{%(Char)s_Score}}} {{label2=^{characteristic-m}}} {{label2=^{weakness-m}}} {{result2=[[[[floor(@{Fatigue})]][@{fatigue_i18n}] + @{wound_total}[@{wounds_i18n}]]]}} {{label3=^{circumstances-m}}} {{result3=[[(?{@{circumstantial_i18n}|0})]]}} {{result0=[[ @{simple-die} + $characteristic_roll$ ]]}}"></button>
        <button type="roll" class="sheet-button sheet-stress-roll" name="roll_%(Char)s_stress" value="&{template:ability} {{name= @{character_name}}} {{label0=^{%(char)s}}} {{banner=@{%(Char)s_Description}}} {{label1=^{score}}} {{result1=@{%(Char)s_Score}}} {{label2=^{characteristic-m}}} {{label2=^{weakness-m}}} {{result2=[[[[floor(@{Fatigue})]][@{fatigue_i18n}] + @{wound_total}[@{wounds_i18n}]]]}} {{label3=^{circumstances-m}}} {{result3=[[(?{@{circumstantial_i18n}|0})]]}} {{result0=[[ @{stress-die} + $characteristic_roll$ ]]}} {{stress=1}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}"></button>
    </div></td>
</tr>"#;

pub fn personality_trait_rows() -> Result<String> {
    repeat_template(PERSONALITY_TRAIT_ROW, &RepeatSource::values(1..=FREE_ROWS))
}

pub fn reputation_rows() -> Result<String> {
    repeat_template(REPUTATION_ROW, &RepeatSource::values(1..=FREE_ROWS))
}

fn characteristics() -> RepeatSource<'static> {
    RepeatSource::Named {
        items: CHARACTERISTICS,
        key: "char",
    }
}

pub fn characteristic_rows() -> Result<String> {
    let template = CHARACTERISTIC_ROW.replace("$characteristic_roll$", CHARACTERISTIC_ROLL);
    repeat_template(&template, &characteristics())
}

pub fn characteristic_score_options() -> Result<String> {
    repeat_template(
        r#"<option value="@{%(Char)s_Score}" data-i18n="%(char)s" >%(Char)s</option>"#,
        &characteristics(),
    )
}

pub fn characteristic_name_options() -> Result<String> {
    repeat_template(
        r#"<option value="%(Char)s" data-i18n="%(char)s" >%(Char)s</option>"#,
        &characteristics(),
    )
}

/// Roll query asking which characteristic score to add
pub fn characteristic_score_ask() -> String {
    let choices: Vec<String> = CHARACTERISTICS
        .iter()
        .map(|c| format!("@{{{c}_i18n}}, @{{{C}_Score}} [@{{{c}_i18n}}]", c = c, C = capitalize(c)))
        .collect();
    format!("?{{@{{characteristic_i18n}}|{}}}", choices.join("| "))
}

/// Roll query over the lower-case characteristic attributes
pub fn characteristic_name_ask_attr() -> String {
    let choices: Vec<String> = CHARACTERISTICS
        .iter()
        .map(|c| format!("@{{{c}_i18n}},@{{{c}_Score}} [@{{{c}_i18n}}]", c = c))
        .collect();
    format!("?{{@{{characteristic_i18n}}|{}}}", choices.join("| "))
}

/// Score row of an art; `key` names the substitution key ("tech" or "form")
fn art_definition_template(key: &str) -> String {
    let upper = capitalize(key);
    format!(
        r#"<tr>
    <td><input type="text" class="sheet-number_3" name="attr_%({upper})s_Score" value="0"/></td>
    <td data-i18n="%({key})s" >%({upper})s</td>
    <td>{xp}</td>
    <td style="text-align: center"><input type="text" class="sheet-number_3 minor" name="attr_%({upper})s_Puissant" value="0"/></td>
</tr>"#,
        key = key,
        upper = upper,
        xp = xp(&format!("%({upper})s"), &XpSuffixes::default()),
    )
}

pub fn technique_definitions() -> Result<String> {
    repeat_template(
        &art_definition_template("tech"),
        &RepeatSource::Named {
            items: TECHNIQUES,
            key: "tech",
        },
    )
}

/// Form rows, split over the two columns of the arts table
pub fn form_definitions() -> Result<(String, String)> {
    let template = art_definition_template("form");
    let (first, second) = FORMS.split_at(FORMS_FIRST_COLUMN);
    let first = repeat_template(
        &template,
        &RepeatSource::Named {
            items: first,
            key: "form",
        },
    )?;
    let second = repeat_template(
        &template,
        &RepeatSource::Named {
            items: second,
            key: "form",
        },
    )?;
    Ok((first, second))
}

/// The four option lists of an art family, named `{prefix}_...`
fn art_options(
    prefix: &str,
    items: &'static [&'static str],
    key: &str,
) -> Result<Vec<(String, String)>> {
    let upper = capitalize(key);
    let named = RepeatSource::Named { items, key };

    let score = repeat_template(
        &format!(
            r#"<option value="(@{{%({upper})s_Score}} + @{{%({upper})s_Puissant}}) [@{{%({key})s_i18n}}]" data-i18n="%({key})s" >%({upper})s</option>"#
        ),
        &named,
    )?;
    let unlabeled = repeat_template(
        &format!(
            r#"<option value="@{{%({upper})s_Score}} + @{{%({upper})s_Puissant}}" data-i18n="%({key})s" >%({upper})s</option>"#
        ),
        &named,
    )?;
    let names = repeat_template(
        &format!(r#"<option value="%({upper})s" data-i18n="%({key})s" >%({upper})s</option>"#),
        &named,
    )?;

    let keys = ["index", key, upper.as_str()];
    let enumerated = repeat_template(
        &format!(r#"<option value="%(index)s" data-i18n="%({key})s" >%({upper})s</option>"#),
        &RepeatSource::Tuples {
            rows: enumerate_helper(items, &[capitalize as fn(&str) -> String], 1),
            keys: &keys,
        },
    )?;

    Ok(vec![
        (format!("{prefix}_score_options"), score),
        (format!("{prefix}_score_options_unlabeled"), unlabeled),
        (format!("{prefix}_name_options"), names),
        (format!("{prefix}_enumerated_options"), enumerated),
    ])
}

/// Every fragment produced by this module, by name
pub fn fragments() -> Result<Vec<(String, String)>> {
    let (forms_1, forms_2) = form_definitions()?;
    let mut fragments = vec![
        ("personality_trait_rows".to_string(), personality_trait_rows()?),
        ("reputation_rows".to_string(), reputation_rows()?),
        ("characteristic_rows".to_string(), characteristic_rows()?),
        ("characteristic_score_options".to_string(), characteristic_score_options()?),
        ("characteristic_score_ask".to_string(), characteristic_score_ask()),
        ("characteristic_name_options".to_string(), characteristic_name_options()?),
        ("characteristic_name_ask_attr".to_string(), characteristic_name_ask_attr()),
        ("technique_definitions".to_string(), technique_definitions()?),
        ("form_definitions_1".to_string(), forms_1),
        ("form_definitions_2".to_string(), forms_2),
    ];
    fragments.extend(art_options("technique", TECHNIQUES, "tech")?);
    fragments.extend(art_options("form", FORMS, "form")?);
    Ok(fragments)
}
