// ABOUTME: Dice-roll macros for abilities, spell casting, and botches
// ABOUTME: Builds the Roll20 macro strings for every simple and stress roll button

use super::data::Die;
use super::error::Result;
use super::repeat::substitute;

/// Appended to every stress roll macro
pub const STRESS_MARKER: &str = " {{stress=1}}";

/// Largest number of botch dice offered by the botch prompt
pub const MAX_BOTCH_DICE: usize = 12;

const BOTCH_DIE: &str = "[[1d10cf10cs0]]";

const ABILITY_TEMPLATE: &str = "&{template:ability} {{name=@{character_name}}} {{label0=@{Ability_name}}} {{banner=@{Ability_Speciality}}} {{label1=^{rank}}} {{result1= [[ @{Ability_Score} + @{Ability_Puissant} ]]}} {{label2=@{Ability_CharacName}}} {{result2=[[@{sys_at}@{character_name}@{sys_pipe}@{Ability_CharacName}_Score@{sys_rbk}]]}} {{label3=^{weakness-m}}} {{result3=[[ ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (@{wound_total}) [@{wounds_i18n}] ]]}} {{label4=^{circumstances-m}}} {{result4=[[(?{@{circumstantial_i18n}|0})]]}} {{result0=%(roll)s}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}";
const ABILITY_ROLL: &str = "[[ %(die)s + (@{Ability_Score} + @{Ability_Puissant}) [@{Ability_name}] + (@{sys_at}@{character_name}@{sys_pipe}@{Ability_CharacName}_Score@{sys_rbk}) [@{sys_at}@{character_name}@{sys_pipe}@{Ability_CharacName}_i18n@{sys_rbk}] + (@{wound_total}) [@{wounds_i18n}] + ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (?{@{circumstantial_i18n}|0}) [@{circumstances_i18n}] ]]";

const SPONTANEOUS_TEMPLATE: &str = "&{template:arcane} {{label0=^{spontaneous} ^{casting}}} {{result0=%(roll)s}} {{label1=^{aura}}} {{result1=@{aura}}} {{label2=^{weakness-m}}} {{result2=[[ @{wound_total}[@{wounds_i18n}] + [[floor(@{fatigue})]][@{fatigue_i18n}] ]]}} {{label3=^{circumstances-m}}} {{result3=?{@{modifiers_i18n}|0}}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical-spontaneous)}}";
const SPONTANEOUS_ROLL: &str = "[[(%(die)s + @{Spontaneous1_Technique} + @{Spontaneous1_Form} + ([[@{Spontaneous1_Focus}]]) [@{focus_i18n}] + (@{gestures}) + (@{words}) + (@{Stamina_Score}) [@{stamina_i18n}] + (@{aura}) [@{aura_i18n}] + ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (@{wound_total}) [@{wounds_i18n}] + (?{@{modifiers_i18n}|0}) [@{modifiers_i18n}] )/2 ]]";

const CEREMONIAL_TEMPLATE: &str = "&{template:arcane} {{label0=^{ceremonial} ^{casting}}} {{result0= %(roll)s }} {{label1=^{aura}}} {{result1=@{aura}}} {{label2=^{weakness-m}}} {{result2=[[@{wound_total}[@{wounds_i18n}] + [[floor(@{fatigue})]][@{fatigue_i18n}] ]]}} {{label3=^{circumstances-m}}} {{result3=?{@{modifiers_i18n}|0}}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical-spontaneous)}}";
const CEREMONIAL_ROLL: &str = "[[(%(die)s+ @{Ceremonial_Technique} + @{Ceremonial_Form} + ([[@{Ceremonial_Focus}]]) [@{focus_i18n}] + (@{gestures}) + (@{words}) + (@{Stamina_Score}) [@{stamina_i18n}] + (@{aura}) [@{aura_i18n}] + ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (@{wound_total}) [@{wounds_i18n}] + (@{Ceremonial_Artes_Lib}) [@{artes_i18n}] + (@{Ceremonial_Philos}) [@{philos_i18n}] + (?{@{modifiers_i18n}|0}) [@{modifiers_i18n}] )/2  ]]";

const FORMULAIC_TEMPLATE: &str = "&{template:arcane} {{label0=^{formulaic} ^{casting}}} {{result0= %(roll)s }} {{label1=^{aura}}} {{result1=@{aura}}} {{label2=^{weakness-m}}} {{result2=[[@{wound_total}[@{wounds_i18n}] + [[floor(@{fatigue})]][@{fatigue_i18n}] ]]}} {{label3=^{circumstances-m}}} {{result3=?{@{modifiers_i18n}|0}}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}";
const FORMULAIC_ROLL: &str = "[[%(die)s + @{Formulaic_Technique} + @{Formulaic_Form} + ([[@{Formulaic_Focus}]]) [@{focus_i18n}] + (@{gestures}) + (@{words}) + (@{Stamina_Score}) [@{stamina_i18n}] + (@{aura}) [@{aura_i18n}] + ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (@{wound_total}) [@{wounds_i18n}] + (?{@{modifiers_i18n}|0}) [@{modifiers_i18n}] ]]";

const RITUAL_TEMPLATE: &str = "&{template:arcane} {{label0=^{ritual} ^{casting}}} {{result0= %(roll)s }} {{label1=^{aura}}} {{result1=@{aura}}} {{label2=^{weakness-m}}} {{result2=[[ @{wound_total}[@{wounds_i18n}] + [[floor(@{fatigue})]][@{fatigue_i18n}] ]]}} {{label3=^{circumstances-m}}} {{result3=?{@{modifiers_i18n}|0}}} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}";
const RITUAL_ROLL: &str = "[[%(die)s + @{Ritual_Technique} + @{Ritual_Form} + ([[@{Ritual_Focus}]]) [@{focus_i18n}] + (@{Stamina_Score}) [@{stamina_i18n}] + (@{aura}) [@{aura_i18n}] + (@{Ritual_Artes_Lib}) [@{artes_i18n}] + (@{Ritual_Philos}) [@{philos_i18n}] + (@{wound_total}) [@{wounds_i18n}] + ([[floor(@{fatigue})]]) [@{fatigue_i18n}] + (?{@{modifiers_i18n}|0}) [@{modifiers_i18n}] ]]";

const SPELL_TEMPLATE: &str = "&{template:spell} {{spell= @{spell_name}}} {{character= @{character_name} }} {{sigil=@{sigil}}} {{roll= %(roll)s }} {{range= @{spell_range} }} {{duration= @{spell_duration} }} {{target= @{spell_target} }} {{effect= @{spell_note} }} {{mastery= @{spell_note-2} }} {{Technique= @{sys_at}@{character_name}@{sys_pipe}@{spell_tech_name}_i18n@{sys_rbk} }} {{Form= @{sys_at}@{character_name}@{sys_pipe}@{spell_form_name}_i18n@{sys_rbk} }} {{Level= @{spell_level} }} {{botch-button=[@{botch_i18n}!](~@{character_name}|botch)}} {{crit-button=[@{critical_i18n}!](~@{character_name}|critical)}}";
const SPELL_ROLL_TAIL: &str = "+ ([[@{spell_Focus}]]) [@{focus_i18n}] + (@{spell_bonus}) [@{bonus_i18n}] + (@{gestures}) + (@{words}) + (@{aura}) [@{aura_i18n}] + ([[floor(@{Fatigue})]]) [@{fatigue_i18n}] + (@{wound_total}) [@{wounds_i18n}] + (?{@{modifiers_i18n}|0}) [@{modifiers_i18n}] ]]";

/// A roll button family sharing one rolltemplate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollKind {
    Ability,
    Spontaneous,
    Ceremonial,
    Formulaic,
    Ritual,
    Spell,
}

impl RollKind {
    pub fn all() -> &'static [RollKind] {
        &[
            RollKind::Ability,
            RollKind::Spontaneous,
            RollKind::Ceremonial,
            RollKind::Formulaic,
            RollKind::Ritual,
            RollKind::Spell,
        ]
    }

    /// Prefix of the fragment names, e.g. `ritual` for `ritual_roll_stress`
    pub fn name(&self) -> &'static str {
        match self {
            RollKind::Ability => "ability",
            RollKind::Spontaneous => "spontaneous",
            RollKind::Ceremonial => "ceremonial",
            RollKind::Formulaic => "formulaic",
            RollKind::Ritual => "ritual",
            RollKind::Spell => "spell",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            RollKind::Ability => ABILITY_TEMPLATE,
            RollKind::Spontaneous => SPONTANEOUS_TEMPLATE,
            RollKind::Ceremonial => CEREMONIAL_TEMPLATE,
            RollKind::Formulaic => FORMULAIC_TEMPLATE,
            RollKind::Ritual => RITUAL_TEMPLATE,
            RollKind::Spell => SPELL_TEMPLATE,
        }
    }

    fn roll(&self) -> String {
        match self {
            RollKind::Ability => ABILITY_ROLL.to_string(),
            RollKind::Spontaneous => SPONTANEOUS_ROLL.to_string(),
            RollKind::Ceremonial => CEREMONIAL_ROLL.to_string(),
            RollKind::Formulaic => FORMULAIC_ROLL.to_string(),
            RollKind::Ritual => RITUAL_ROLL.to_string(),
            RollKind::Spell => format!(
                "[[%(die)s + (@{{Stamina_Score}}) [@{{stamina_i18n}}] + {} + {}{}",
                spell_tech_value(),
                spell_form_value(),
                SPELL_ROLL_TAIL
            ),
        }
    }

    /// Full macro of this roll with the given die
    pub fn macro_for(&self, die: Die) -> Result<String> {
        let roll = substitute(&self.roll(), &[("die", die.attribute())])?;
        let mut rendered = substitute(self.template(), &[("roll", roll.as_str())])?;
        if die == Die::Stress {
            rendered.push_str(STRESS_MARKER);
        }
        Ok(rendered)
    }

    /// Fragment name of the macro, e.g. `spell_roll_simple`
    pub fn fragment_name(&self, die: Die) -> String {
        format!("{}_roll_{}", self.name(), die.suffix())
    }
}

/// Deferred lookup of `{attribute-value}{suffix}` on the rolling character
fn deferred(attribute: &str, suffix: &str) -> String {
    format!("@{{sys_at}}@{{character_name}}@{{sys_pipe}}@{{{attribute}}}{suffix}@{{sys_rbk}}")
}

/// Score plus puissance of the art named by `attribute`, labelled with its translation
fn deferred_art_value(attribute: &str) -> String {
    format!(
        "({} + {}) [{}]",
        deferred(attribute, "_Score"),
        deferred(attribute, "_Puissant"),
        deferred(attribute, "_i18n")
    )
}

/// Value of the spell's technique; the focus field of the spell row needs it too
pub fn spell_tech_value() -> String {
    deferred_art_value("spell_tech_name")
}

/// Value of the spell's form
pub fn spell_form_value() -> String {
    deferred_art_value("spell_form_name")
}

/// Roll query asking how many botch dice to roll
pub fn botch_separated() -> String {
    let choices: Vec<String> = (1..=MAX_BOTCH_DICE)
        .map(|n| {
            let label = if n == 1 { "Die" } else { "Dice" };
            format!("{n} {label},{}", vec![BOTCH_DIE; n].join(" "))
        })
        .collect();
    format!("?{{@{{botch_num_i18n}} | {}}}", choices.join("|"))
}

/// Every fragment produced by this module, by name
pub fn fragments() -> Result<Vec<(String, String)>> {
    let mut fragments = Vec::new();
    for kind in RollKind::all() {
        for die in Die::all() {
            fragments.push((kind.fragment_name(*die), kind.macro_for(*die)?));
        }
    }
    fragments.push(("spell_tech_value".to_string(), spell_tech_value()));
    fragments.push(("spell_form_value".to_string(), spell_form_value()));
    fragments.push(("botch_separated".to_string(), botch_separated()));
    Ok(fragments)
}
