use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the cinematch binary, isolated from the user's config
pub fn cinematch(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("cinematch");
    cmd.env("CINEMATCH_CONFIG_DIR", config_dir)
        .env_remove("CINEMATCH_CONFIG")
        .env_remove("CINEMATCH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub struct Fixture {
    pub movies: PathBuf,
    pub keywords: PathBuf,
    pub ratings: PathBuf,
}

impl Fixture {
    /// Data-path flags for every command
    pub fn args(&self) -> Vec<String> {
        vec![
            "--movies".to_string(),
            self.movies.display().to_string(),
            "--keywords".to_string(),
            self.keywords.display().to_string(),
            "--ratings".to_string(),
            self.ratings.display().to_string(),
        ]
    }
}

const MOVIES: &str = "\
adult,id,title,release_date,overview
False,1,Alien,1979-05-25,The crew of a space freighter meets a deadly creature
False,2,Aliens,1986-07-18,Marines return to the planet to fight the creatures
False,3,Wedding Crashers,2005-07-15,Two friends crash weddings to meet women
False,4,Heat,1995-12-15,A detective hunts a crew of professional thieves
False,5,The Matrix,1999-03-30,A hacker learns the world is a simulation
False,6,The Matrix Reloaded,2003-05-15,The hacker returns to fight the machines
False,7,Untitled Project,,
";

const KEYWORDS: &str = "\
id,keywords
1,\"[{'id': 1, 'name': 'space'}, {'id': 2, 'name': 'alien'}, {'id': 3, 'name': 'monster'}]\"
2,\"[{'id': 1, 'name': 'space'}, {'id': 2, 'name': 'alien'}, {'id': 4, 'name': 'marine'}]\"
3,\"[{'id': 5, 'name': 'wedding'}, {'id': 6, 'name': 'comedy'}]\"
4,\"[{'id': 7, 'name': 'heist'}, {'id': 8, 'name': 'crime'}]\"
5,\"[{'id': 9, 'name': 'hacker'}, {'id': 10, 'name': 'simulation'}]\"
6,\"[{'id': 9, 'name': 'hacker'}, {'id': 10, 'name': 'simulation'}, {'id': 11, 'name': 'sequel'}]\"
";

const RATINGS: &str = "\
userId,movieId,rating,timestamp
1,2,4.0,1260759144
2,2,3.0,1260759179
1,5,5.0,1260759182
";

/// Write the three data tables into `dir`
pub fn write_fixture(dir: &Path) -> Fixture {
    let fixture = Fixture {
        movies: dir.join("movies_metadata.csv"),
        keywords: dir.join("keywords.csv"),
        ratings: dir.join("ratings.csv"),
    };
    fs::write(&fixture.movies, MOVIES).unwrap();
    fs::write(&fixture.keywords, KEYWORDS).unwrap();
    fs::write(&fixture.ratings, RATINGS).unwrap();
    fixture
}
