//! The archetype tables.
//!
//! Transcribed entry-for-entry from the Data Exchange reference for
//! tomography. Docstrings are documentation only; `units` strings are
//! persisted verbatim as the `units` attribute on written leaves.

use super::{Archetype, FieldSpec};

const fn field(
    name: &'static str,
    units: Option<&'static str>,
    docstring: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        units,
        docstring,
        extra_attrs: &[],
    }
}

pub static EXCHANGE: Archetype = Archetype {
    root: "/exchange",
    entry_name: "",
    docstring: "Used for grouping the results of the measurement",
    fields: &[field(
        "name",
        Some("text"),
        "Description of the data contained inside",
    )],
};

pub static DATA: Archetype = Archetype {
    root: "/exchange",
    entry_name: "",
    docstring: "The result of the measurement.",
    fields: &[field("data", Some("counts"), "The result of the measurement.")],
};

pub static SAMPLE: Archetype = Archetype {
    root: "/measurement",
    entry_name: "sample",
    docstring: "The sample measured.",
    fields: &[
        field("name", Some("text"), "Descriptive name of the sample."),
        field("description", Some("text"), "Description of the sample."),
        field(
            "preparation_date",
            Some("text"),
            "Date and time the sample was prepared.",
        ),
        field(
            "chemical_formula",
            Some("text"),
            "Sample chemical formula using the CIF format.",
        ),
        field("mass", Some("kg"), "Mass of the sample."),
        field("concentration", Some("kgm^-3"), "Mass/volume."),
        field("environment", Some("text"), "Sample environment."),
        field("temperature", Some("kelvin"), "Sample temperature."),
        field(
            "temperature_set",
            Some("kelvin"),
            "Sample temperature set point.",
        ),
        field("pressure", Some("kPa"), "Sample pressure."),
        field("fatigue_cycle", None, "Sample fatigue cycles."),
        field("thickness", Some("m"), "Sample thickness."),
        field(
            "tray",
            Some("text"),
            "Sample position in the sample changer/robot.",
        ),
        field("comment", Some("text"), "comment"),
    ],
};

pub static EXPERIMENT: Archetype = Archetype {
    root: "/measurement/sample",
    entry_name: "experiment",
    docstring: "This provides references to facility ids for the proposal, \
                scheduled activity, and safety form.",
    fields: &[
        field(
            "proposal",
            Some("text"),
            "Proposal reference number. For the APS this is the General User \
             Proposal number.",
        ),
        field(
            "activity",
            Some("text"),
            "Proposal scheduler id. For the APS this is the beamline \
             scheduler activity id.",
        ),
        field(
            "safety",
            Some("text"),
            "Safety reference document. For the APS this is the Experiment \
             Safety Approval Form number.",
        ),
        field(
            "title",
            Some("text"),
            "Experiment title. For the APS this is the proposal title \
             assigned by the user.",
        ),
    ],
};

pub static EXPERIMENTER: Archetype = Archetype {
    root: "/measurement/sample",
    entry_name: "experimenter",
    docstring: "Description of a single experimenter.",
    fields: &[
        field("name", Some("text"), "User name."),
        field("role", Some("text"), "User role."),
        field("affiliation", Some("text"), "User affiliation."),
        field("address", Some("text"), "User address."),
        field("phone", Some("text"), "User phone number."),
        field("email", Some("text"), "User email address."),
        field("facility_user_id", Some("text"), "User badge number."),
    ],
};

pub static INSTRUMENT: Archetype = Archetype {
    root: "/measurement",
    entry_name: "instrument",
    docstring: "All relevant beamline components status at the beginning of \
                a measurement",
    fields: &[
        field("name", Some("text"), "Name of the instrument."),
        field("comment", Some("text"), "comment"),
    ],
};

pub static SOURCE: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "source",
    docstring: "The light source being used",
    fields: &[
        field("name", Some("text"), "Name of the facility."),
        field(
            "datetime",
            Some("text"),
            "Date and time source was measured.",
        ),
        field("beamline", Some("text"), "Name of the beamline."),
        field("current", Some("A"), "Electron beam current (A)."),
        field(
            "energy",
            Some("J"),
            "Characteristic photon energy of the source (J). For an APS \
             bending magnet this is 30 keV or 4.807e-15 J.",
        ),
        field(
            "pulse_energy",
            Some("J"),
            "Sum of the energy of all the photons in the pulse (J).",
        ),
        field("pulse_width", Some("s"), "Duration of the pulse (s)."),
        field("mode", Some("text"), "top-up"),
        field(
            "beam_intensity_incident",
            Some("phs^-1"),
            "Incident beam intensity in (photons per s).",
        ),
        field(
            "beam_intensity_transmitted",
            Some("phs^-1"),
            "Transmitted beam intensity (photons per s).",
        ),
    ],
};

pub static ATTENUATOR: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "attenuator",
    docstring: "X-ray beam attenuator.",
    fields: &[
        field("name", Some("text"), "Name of the attenuator."),
        field(
            "description",
            Some("text"),
            "Description or composition of attenuator.",
        ),
        field(
            "thickness",
            Some("m"),
            "Thickness of attenuator along beam direction.",
        ),
        field(
            "transmission",
            Some("None"),
            "The nominal amount of the beam that gets through (transmitted \
             intensity)/(incident intensity)",
        ),
    ],
};

pub static MONOCHROMATOR: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "monochromator",
    docstring: "X-ray beam monochromator.",
    fields: &[
        field("name", Some("text"), "Name of the monochromator."),
        field("description", Some("text"), "Description of the monochromator"),
        field(
            "energy",
            Some("J"),
            "Peak of the spectrum that the monochromator selects. When units \
             is not defined this field is in J",
        ),
        field(
            "energy_error",
            Some("J"),
            "Standard deviation of the spectrum that the monochromator \
             selects. When units is not defined this field is in J.",
        ),
        field(
            "mono_stripe",
            Some("text"),
            "Type of multilayer coating or crystal.",
        ),
    ],
};

pub static MIRROR: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "mirror",
    docstring: "X-ray beam mirror.",
    fields: &[
        field("name", Some("text"), "Name of the mirror."),
        field("description", Some("text"), "Description of the mirror"),
        field("angle", Some("rad"), "Mirror incident angle"),
    ],
};

pub static DETECTOR: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "detector",
    docstring: "X-ray detector.",
    fields: &[
        field("name", Some("text"), "Name of the detector."),
        field("description", Some("text"), "Description of the detector"),
        field("manufacturer", Some("text"), "The detector manufacturer."),
        field("model", Some("text"), "The detector model"),
        field("serial_number", Some("text"), "The detector serial number."),
        field(
            "firmware_version",
            Some("text"),
            "The detector firmware version.",
        ),
        field(
            "software_version",
            Some("text"),
            "The detector software version.",
        ),
        field(
            "bit_depth",
            Some("dimensionless"),
            "The detector ADC bit depth.",
        ),
        field(
            "pixel_size_x",
            Some("m"),
            "Physical detector pixel size (m).",
        ),
        field(
            "pixel_size_y",
            Some("m"),
            "Physical detector pixel size (m).",
        ),
        field(
            "actual_pixel_size_x",
            Some("m"),
            "Pixel size on the sample plane (m).",
        ),
        field(
            "actual_pixel_size_y",
            Some("m"),
            "Pixel size on the sample plane (m).",
        ),
        field(
            "dimension_x",
            Some("pixels"),
            "The detector horiz. dimension.",
        ),
        field(
            "dimension_y",
            Some("text"),
            "The detector vertical dimension.",
        ),
        field(
            "binning_x",
            Some("pixels"),
            "If the data are collected binning the detector x binning and y \
             binning store the binning factor.",
        ),
        field(
            "binning_y",
            Some("dimensionless"),
            "If the data are collected binning the detector x binning and y \
             binning store the binning factor.",
        ),
        field(
            "operating_temperature",
            Some("dimensionless"),
            "The detector operating temperature (K).",
        ),
        field(
            "exposure_time",
            Some("s"),
            "The set detector exposure time (s).",
        ),
        field(
            "delay_time",
            Some("s"),
            "Detector delay time (s). This is used in combination with a \
             mechanical shutter.",
        ),
        field(
            "stabilization_time",
            Some("s"),
            "Detector delay time (s). This is used during stop and go data \
             collection to allow the sample to stabilize.",
        ),
        field("frame_rate", Some("fps"), "The detector frame rate (fps)."),
        field(
            "shutter_mode",
            Some("text"),
            "The detector shutter mode: global, rolling etc.",
        ),
        field(
            "output_data",
            Some("text"),
            "String HDF5 path to the exchange group where the detector \
             output data is located.",
        ),
        field(
            "counts_per_joule",
            Some("counts"),
            "Number of counts recorded per each joule of energy received by \
             the detector",
        ),
        field(
            "basis_vectors",
            Some("fps"),
            "A matrix with the basis vectors of the detector data.",
        ),
        field(
            "corner_position",
            Some("fps"),
            "The x, y and z coordinates of the corner of the first data \
             element.",
        ),
    ],
};

pub static ROI: Archetype = Archetype {
    root: "/measurement/instrument/detector",
    entry_name: "roi",
    docstring: "region of interest (ROI) of the image actually collected, if \
                smaller than the full CCD.",
    fields: &[
        field("name", Some("text"), "ROI name"),
        field("description", Some("text"), "ROI description"),
        field("min_x", Some("pixels"), "Top left x pixel position"),
        field("min_y", Some("pixels"), "Top left y pixel position"),
        field("size_x", Some("pixels"), "Horizontal image size"),
        field("size_y", Some("pixels"), "Vertical image size"),
    ],
};

pub static OBJECTIVE: Archetype = Archetype {
    root: "/measurement/instrument/detection_system",
    entry_name: "objective",
    docstring: "microscope objective lenses used.",
    fields: &[
        field("name", Some("text"), "Lens name"),
        field("description", Some("text"), "Lens description"),
        field("manufacturer", Some("text"), "Lens manufacturer"),
        field("model", Some("text"), "Lens model."),
        field(
            "magnification",
            Some("dimensionless"),
            "Lens specified magnification",
        ),
        field(
            "numerical_aperture",
            Some("dimensionless"),
            "The numerical aperture (N.A.) is a measure of the \
             light-gathering characteristics of the lens.",
        ),
    ],
};

pub static SCINTILLATOR: Archetype = Archetype {
    root: "/measurement/instrument/detection_system",
    entry_name: "scintillator",
    docstring: "scintillator used.",
    fields: &[
        field("name", Some("text"), "Scintillator name"),
        field("description", Some("text"), "Scintillator description"),
        field("manufacturer", Some("text"), "Scintillator Manufacturer."),
        field(
            "serial_number",
            Some("text"),
            "Scintillator serial number.",
        ),
        field(
            "scintillating_thickness",
            Some("m"),
            "Scintillator thickness.",
        ),
        field(
            "substrate_thickness",
            Some("m"),
            "Scintillator substrate thickness.",
        ),
    ],
};

pub static SAMPLE_STACK: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "sample",
    docstring: "Sample stack name",
    fields: &[
        field(
            "name",
            Some("text"),
            "Descriptive name of the sample stack.",
        ),
        field(
            "description",
            Some("text"),
            "Description of the sample stack.",
        ),
    ],
};

pub static SAMPLE_STACK_SETUP: Archetype = Archetype {
    root: "/measurement/instrument/sample",
    entry_name: "setup",
    docstring: "Tomography specific tag to store motor positions that are \
                static during data collection.",
    fields: &[
        field(
            "sample_x",
            Some("mm"),
            "Initial position of the X stage under the rotary motor.",
        ),
        field(
            "sample_y",
            Some("mm"),
            "Initial position of the Y stage under the rotary motor.",
        ),
        field(
            "sample_z",
            Some("mm"),
            "Initial position of the Z stage under the rotary motor.",
        ),
        field(
            "sample_xx",
            Some("mm"),
            "Initial position of the X stage on top of the rotary motor.",
        ),
        field(
            "sample_zz",
            Some("mm"),
            "Initial position of the Z stage on top of the rotary motor.",
        ),
        field(
            "detector_distance",
            Some("mm"),
            "Sample to detector distance.",
        ),
    ],
};

pub static INTERFEROMETER: Archetype = Archetype {
    root: "/measurement/instrument",
    entry_name: "interferometer",
    docstring: "interferometer name",
    fields: &[
        field(
            "name",
            Some("text"),
            "Descriptive name of the interferometer.",
        ),
        field(
            "description",
            Some("text"),
            "Description of the interferometer.",
        ),
    ],
};

pub static INTERFEROMETER_SETUP: Archetype = Archetype {
    root: "/measurement/instrument/interferometer",
    entry_name: "setup",
    docstring: "Tomography specific tag to store interferometer parameters.",
    fields: &[
        field("grid_start", Some("mm"), "Interferometer grid start."),
        field("grid_end", Some("mm"), "Interferometer grid end."),
        field(
            "number_of_grid_periods",
            None,
            "Interferometer number of grid periods.",
        ),
        field(
            "number_of_grid_steps",
            None,
            "Interferometer number of grid steps.",
        ),
    ],
};

pub static PROCESS: Archetype = Archetype {
    root: "/process",
    entry_name: "",
    docstring: "Describes parameters used to generate raw and processed data.",
    fields: &[field("name", Some("text"), "Name of the simulation")],
};

pub static ACQUISITION: Archetype = Archetype {
    root: "/process",
    entry_name: "acquisition",
    docstring: "Tomography specific tag to store dynamic (per image) \
                parameters.",
    fields: &[
        field(
            "start_date",
            Some("text"),
            "Date and time measurement starts.",
        ),
        field("end_date", Some("text"), "Date and time measurement ends."),
        field(
            "sample_position_x",
            Some("mm"),
            "Vector containing the position of the sample axis x at each \
             projection image collection.",
        ),
        field(
            "sample_position_y",
            Some("mm"),
            "Vector containing the position of the sample axis y at each \
             projection image collection.",
        ),
        field(
            "sample_position_z",
            Some("mm"),
            "Vector containing the position of the sample axis z at each \
             projection image collection.",
        ),
        field(
            "sample_image_shift_x",
            Some("pixels"),
            "Vector containing the shift of the sample axis x at each \
             projection on the detector plane.",
        ),
        field(
            "sample_image_shift_y",
            Some("pixels"),
            "Vector containing the shift of the sample axis y at each \
             projection on the detector plane.",
        ),
        field(
            "image_theta",
            Some("degree"),
            "Vector containing the rotary stage angular position read from \
             the encoder at each image.",
        ),
        field(
            "scan_index",
            None,
            "Vector containin for each image the identifier assigned by \
             beamline controls to each individual series of images or scan.",
        ),
        field(
            "scan_date",
            None,
            "Vector containing for each image the wall date/time at start of \
             scan in iso 8601.",
        ),
        field(
            "image_date",
            Some("time"),
            "Vector containing the date/time each image was acquired in iso \
             8601.",
        ),
        field(
            "time_stamp",
            None,
            "Vector containin for each image the relative time since \
             scan_date in 1e-7 seconds.",
        ),
        field(
            "image_number",
            None,
            "Vector containin for each image the the image serial number as \
             assigned by the camera. Unique for each individual scan. Always \
             starts at 0.",
        ),
        field(
            "image_exposure_time",
            None,
            "Vector containin for each image the the measured exposure time \
             in 1e-7 seconds (0.1us)",
        ),
        field(
            "image_is_complete",
            None,
            "Vector containin for each image the boolen status of: is any \
             pixel data missing?",
        ),
        field(
            "shutter",
            None,
            "Vector containin for each image the beamline shutter status: 0 \
             for closed, 1 for open",
        ),
        field(
            "image_type",
            None,
            "Vector containin for each image contained in /exchange/data 0 \
             for white, 1 for projection and 2 for dark",
        ),
    ],
};

pub static ACQUISITION_SETUP: Archetype = Archetype {
    root: "/process/acquisition",
    entry_name: "setup",
    docstring: "Tomography specific tag to store static scan parameters.",
    fields: &[
        field("number_of_projections", None, "Number of projections."),
        field("number_of_darks", None, "Number of dark images."),
        field("number_of_whites", None, "Number of white images."),
        field("number_of_inter_whites", None, "Number of inter whites."),
        field("white_frequency", None, "White frequency."),
        field(
            "sample_in",
            Some("mm"),
            "Position of the sample axis (x or y) used for taking the sample \
             out of the beam during data collection.",
        ),
        field(
            "sample_out",
            Some("mm"),
            "Position of the sample axis (x or y) used for taking the sample \
             out of the beam during the white field data collection.",
        ),
        field(
            "rotation_start_angle",
            Some("degree"),
            "Position of rotation axis at the end of data collection.",
        ),
        field(
            "rotation_end_angle",
            Some("degree"),
            "Position of rotation axis at the start of the data collection.",
        ),
        field(
            "rotation_speed",
            Some("degree per second"),
            "Rotation axis speed.",
        ),
        field(
            "angular_step",
            Some("degree"),
            "Rotation axis angular step used during data collection.",
        ),
        field("mode", Some("text"), "Scan mode: continuos or stop-go."),
        field("comment", Some("text"), "comment"),
    ],
};
