use crate::core::models::job::{JobDescriptor, JobParameters};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Writer for the `key = value` configuration files read by `vina --config`.
pub struct VinaConfigFile;

impl VinaConfigFile {
    /// Writes the configuration of `job` to `writer`.
    ///
    /// Output and log names are written relative to the work directory, which is
    /// where the engine is launched. Extra options follow the box definition in
    /// the order they were configured.
    pub fn write_to(
        job: &JobDescriptor,
        params: &JobParameters,
        writer: &mut impl Write,
    ) -> io::Result<()> {
        let center = job.bbox.center();
        let size = job.bbox.lengths();

        writeln!(writer, "cpu = {}", params.cpu)?;
        writeln!(writer, "out = {}", job.output_file_name())?;
        writeln!(writer, "log = {}", job.log_file_name())?;
        writeln!(writer, "receptor = {}", params.receptor)?;
        writeln!(writer, "ligand = {}", params.ligand)?;

        writeln!(writer, "center_x = {}", center.x)?;
        writeln!(writer, "center_y = {}", center.y)?;
        writeln!(writer, "center_z = {}", center.z)?;

        writeln!(writer, "size_x = {}", size.x)?;
        writeln!(writer, "size_y = {}", size.y)?;
        writeln!(writer, "size_z = {}", size.z)?;

        for (key, value) in &params.extra_options {
            writeln!(writer, "{} = {}", key, value)?;
        }
        Ok(())
    }

    /// Writes the configuration to `job.config_path`, replacing any previous file.
    ///
    /// Returns the config path and the log path the engine is expected to produce.
    pub fn write_job(job: &JobDescriptor, params: &JobParameters) -> io::Result<(PathBuf, PathBuf)> {
        let file = File::create(&job.config_path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(job, params, &mut writer)?;
        writer.flush()?;
        Ok((job.config_path.clone(), job.log_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bounding_box::BoundingBox;
    use nalgebra::{Point3, Vector3};
    use std::path::Path;

    fn job(work_dir: &Path) -> JobDescriptor {
        JobDescriptor {
            name: "4".to_string(),
            config_path: work_dir.join("4.conf"),
            log_path: work_dir.join("4.log"),
            bbox: BoundingBox::centered(Point3::new(1.5, -2.0, 0.0), Vector3::new(10.0, 12.0, 8.0)),
        }
    }

    fn params() -> JobParameters {
        JobParameters {
            cpu: 8,
            receptor: "receptor.pdbqt".to_string(),
            ligand: "ligand.pdbqt".to_string(),
            extra_options: vec![
                ("num_modes".to_string(), "20".to_string()),
                ("exhaustiveness".to_string(), "16".to_string()),
            ],
        }
    }

    #[test]
    fn writes_all_required_keys_then_extra_options() {
        let mut buf = Vec::new();
        VinaConfigFile::write_to(&job(Path::new("work")), &params(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = "\
cpu = 8
out = 4.pdbqt
log = 4.log
receptor = receptor.pdbqt
ligand = ligand.pdbqt
center_x = 1.5
center_y = -2
center_z = 0
size_x = 10
size_y = 12
size_z = 8
num_modes = 20
exhaustiveness = 16
";
        assert_eq!(text, expected);
    }

    #[test]
    fn write_job_creates_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path());

        let (config_path, log_path) = VinaConfigFile::write_job(&job, &params()).unwrap();
        assert_eq!(config_path, dir.path().join("4.conf"));
        assert_eq!(log_path, dir.path().join("4.log"));

        let text = std::fs::read_to_string(config_path).unwrap();
        assert!(text.starts_with("cpu = 8\n"));
        assert!(text.contains("size_y = 12\n"));
    }
}
