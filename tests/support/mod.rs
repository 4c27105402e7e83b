use std::env::temp_dir;
use std::path::PathBuf;

pub fn write_temp(ext: &str, content: &str) -> PathBuf {
    let mut path = temp_dir();
    path.push(format!("{:016X}.{}", rand::random::<u64>(), ext));
    std::fs::write(&path, content).unwrap();
    path
}
