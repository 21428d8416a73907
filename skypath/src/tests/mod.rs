//! skypath lib test modules

mod properties;
