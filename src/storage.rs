use std::{
    fs::File,
    io::{self, Write},
};

// Utils to store the rendered group feed on local device.
pub struct LocalSaver;

impl LocalSaver {
    /// Overwrites `fname` unconditionally. No backup, no atomic rename.
    pub fn save_group_feed_html(fname: &str, html: &str) -> io::Result<()> {
        let mut file = File::create(fname)?;
        file.write_all(html.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
