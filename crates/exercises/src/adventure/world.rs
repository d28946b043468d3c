//! The game world: rooms, items and one monster

use std::collections::BTreeMap;

use modelkit_validator::prelude::Discriminant;

use super::command::{Command, Direction};
use super::{AdventureError, FAREWELL};

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game goes on; show the text.
    Continue(String),
    /// The game is over; show the text and stop.
    Finished(String),
}

impl Outcome {
    /// The text to show the player.
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Finished(text) => text,
        }
    }

    /// Returns `true` if the game ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// A room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    description: String,
    exits: BTreeMap<Direction, String>,
    items: Vec<String>,
}

impl Room {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    fn exit(mut self, direction: Direction, to: &str) -> Self {
        self.exits.insert(direction, to.to_owned());
        self
    }

    fn item(mut self, item: &str) -> Self {
        self.items.push(item.to_owned());
        self
    }
}

/// Whether the monster can still fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonsterState {
    Alive,
    Slain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Monster {
    name: String,
    description: String,
    room: String,
    state: MonsterState,
}

/// Taking this item wins the game.
const TREASURE: &str = "treasure";

/// Fighting the monster without this item loses the game.
const WEAPON: &str = "sword";

/// The full game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: BTreeMap<String, Room>,
    location: String,
    inventory: Vec<String>,
    monster: Monster,
}

impl World {
    /// The built-in three-room map, starting in `start_room`.
    ///
    /// # Errors
    ///
    /// [`AdventureError::UnknownRoom`] if `start_room` is not on the map.
    pub fn classic(start_room: &str) -> Result<Self, AdventureError> {
        let rooms = [
            Room::new("hall", "A dusty entrance hall. Torches flicker on the walls.")
                .exit(Direction::North, "armory")
                .exit(Direction::East, "cellar")
                .item("lamp"),
            Room::new("armory", "Racks of rusted weapons line the walls.")
                .exit(Direction::South, "hall")
                .item(WEAPON),
            Room::new("cellar", "A damp cellar. Something growls in the dark.")
                .exit(Direction::West, "hall")
                .item(TREASURE),
        ];
        let rooms: BTreeMap<String, Room> = rooms
            .into_iter()
            .map(|room| (room.name.clone(), room))
            .collect();

        if !rooms.contains_key(start_room) {
            return Err(AdventureError::UnknownRoom(start_room.to_owned()));
        }

        Ok(Self {
            rooms,
            location: start_room.to_owned(),
            inventory: Vec::new(),
            monster: Monster {
                name: "troll".to_owned(),
                description: "A hulking troll with a nasty club.".to_owned(),
                room: "cellar".to_owned(),
                state: MonsterState::Alive,
            },
        })
    }

    /// The current room's name.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Items the player carries.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Describes the current room.
    pub fn look(&self) -> String {
        let Some(room) = self.rooms.get(&self.location) else {
            return "You are nowhere.".to_owned();
        };

        let mut text = format!("{}\n{}", capitalize(&room.name), room.description);
        let exits: Vec<String> = room.exits.keys().map(ToString::to_string).collect();
        if !exits.is_empty() {
            text.push_str(&format!("\nExits: {}.", exits.join(", ")));
        }
        if !room.items.is_empty() {
            text.push_str(&format!("\nYou see: {}.", room.items.join(", ")));
        }
        if self.monster_here() {
            text.push_str(&format!("\nA {} blocks the way.", self.monster.name));
        }
        text
    }

    /// Applies one command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Look => Outcome::Continue(self.look()),
            Command::LookAt(target) => Outcome::Continue(self.look_at(&target)),
            Command::Go(destination) => Outcome::Continue(self.go(&destination)),
            Command::Take(item) => self.take(&item),
            Command::Drop(item) => Outcome::Continue(self.drop_item(&item)),
            Command::Fight(who) => self.fight(&who),
            Command::Quit => Outcome::Finished(FAREWELL.to_owned()),
        }
    }

    fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.get_mut(&self.location)
    }

    fn monster_here(&self) -> bool {
        self.monster.room == self.location && self.monster.state == MonsterState::Alive
    }

    fn look_at(&self, target: &str) -> String {
        let in_room = self
            .rooms
            .get(&self.location)
            .is_some_and(|room| room.items.iter().any(|item| item == target));
        let carried = self.inventory.iter().any(|item| item == target);

        if self.monster.room == self.location && self.monster.name == target {
            match self.monster.state {
                MonsterState::Alive => self.monster.description.clone(),
                MonsterState::Slain => format!("The {} lies still.", self.monster.name),
            }
        } else if in_room || carried {
            format!("It is an ordinary {target}.")
        } else {
            format!("You see no {target} here.")
        }
    }

    fn go(&mut self, destination: &str) -> String {
        let next = Direction::from_tag(destination).ok().and_then(|direction| {
            self.rooms
                .get(&self.location)
                .and_then(|room| room.exits.get(&direction))
                .cloned()
        });
        match next {
            Some(next) => {
                tracing::debug!(from = %self.location, to = %next, "player moved");
                self.location = next;
                self.look()
            }
            None => format!("You can't go {destination} from here."),
        }
    }

    fn take(&mut self, item: &str) -> Outcome {
        if item == TREASURE && self.monster_here() {
            return Outcome::Continue(format!("The {} will not let you near it.", self.monster.name));
        }

        let Some(room) = self.current_room_mut() else {
            return Outcome::Continue(format!("There is no {item} here."));
        };
        let Some(position) = room.items.iter().position(|i| i == item) else {
            return Outcome::Continue(format!("There is no {item} here."));
        };
        let taken = room.items.remove(position);
        self.inventory.push(taken);

        if item == TREASURE {
            tracing::info!("treasure taken");
            Outcome::Continue("You grab the treasure. You win! Type quit to leave.".to_owned())
        } else {
            Outcome::Continue(format!("Taken: {item}."))
        }
    }

    fn drop_item(&mut self, item: &str) -> String {
        let Some(position) = self.inventory.iter().position(|i| i == item) else {
            return format!("You are not carrying {item}.");
        };
        let dropped = self.inventory.remove(position);
        match self.current_room_mut() {
            Some(room) => {
                room.items.push(dropped);
                format!("Dropped: {item}.")
            }
            None => {
                self.inventory.push(dropped);
                format!("You cannot drop {item} here.")
            }
        }
    }

    fn fight(&mut self, who: &str) -> Outcome {
        if !(self.monster_here() && self.monster.name == who) {
            return Outcome::Continue(format!("There is no {who} to fight here."));
        }

        if self.inventory.iter().any(|item| item == WEAPON) {
            self.monster.state = MonsterState::Slain;
            tracing::info!(monster = %self.monster.name, "monster slain");
            Outcome::Continue(format!("You slay the {} with the {WEAPON}.", self.monster.name))
        } else {
            Outcome::Continue(format!(
                "You fight the {} bare-handed and are knocked back. Find a weapon.",
                self.monster.name
            ))
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
