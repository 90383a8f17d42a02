// =============================================================================
// Prototype: game characters
// =============================================================================

use std::fmt;

use crate::prototype::Prototype;

#[derive(Debug, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Weapon {
            name: name.into(),
            damage,
        }
    }
}

impl Prototype for Weapon {
    fn duplicate(&self) -> Self {
        Weapon {
            name: self.name.clone(),
            damage: self.damage,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Armor {
    pub name: String,
    pub defense: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: u32) -> Self {
        Armor {
            name: name.into(),
            defense,
        }
    }
}

impl Prototype for Armor {
    fn duplicate(&self) -> Self {
        Armor {
            name: self.name.clone(),
            defense: self.defense,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub power: u32,
}

impl Skill {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Skill {
            name: name.into(),
            power,
        }
    }
}

impl Prototype for Skill {
    fn duplicate(&self) -> Self {
        Skill {
            name: self.name.clone(),
            power: self.power,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Character {
    pub health: u32,
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub weapon: Weapon,
    pub armor: Armor,
    pub skills: Vec<Skill>,
}

impl Character {
    /// A duplicate that differs only in health.
    pub fn with_health(&self, health: u32) -> Self {
        Character {
            health,
            ..self.duplicate()
        }
    }
}

impl Prototype for Character {
    fn duplicate(&self) -> Self {
        Character {
            health: self.health,
            strength: self.strength,
            agility: self.agility,
            intelligence: self.intelligence,
            weapon: self.weapon.duplicate(),
            armor: self.armor.duplicate(),
            skills: self.skills.duplicate(),
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP:{}, STR:{}, Weapon:{}",
            self.health, self.strength, self.weapon.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        Character {
            health: 100,
            strength: 20,
            agility: 15,
            intelligence: 10,
            weapon: Weapon::new("Sword", 50),
            armor: Armor::new("Steel Armor", 30),
            skills: vec![Skill::new("Fireball", 100)],
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(hero().to_string(), "HP:100, STR:20, Weapon:Sword");
    }

    #[test]
    fn test_with_health_leaves_original() {
        let original = hero();
        let clone = original.with_health(200);

        assert_eq!(original.to_string(), "HP:100, STR:20, Weapon:Sword");
        assert_eq!(clone.to_string(), "HP:200, STR:20, Weapon:Sword");
        assert_eq!(clone.skills, original.skills);
    }

    #[test]
    fn test_duplicate_owns_nested_values() {
        let original = hero();
        let mut clone = original.duplicate();

        clone.weapon.name.push_str(" of Fire");
        clone.skills[0].power = 1;
        clone.skills.push(Skill::new("Heal", 40));

        assert_eq!(original.weapon.name, "Sword");
        assert_eq!(original.skills.len(), 1);
        assert_eq!(original.skills[0].power, 100);
    }
}
