// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions for reading and writing FITS binary tables.
//!
//! The `fitsio` crate is used where its API covers what we need; the
//! fixed-width string-array columns of the archive table are not expressible
//! through its `ColumnDescription`, so table creation and the vector columns
//! go through raw cfitsio calls guarded by [`check_status`].

use std::{
    ffi::CString,
    fmt::Display,
    os::raw::{c_char, c_int},
    path::Path,
};

use fitsio::{errors::check_status, hdu::*, FitsFile};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitsError {
    /// Error when opening a fits file.
    #[error(
        "{source_file}:{source_line}:{source_column}: Couldn't open {fits_filename}: {fits_error}"
    )]
    Open {
        fits_error: Box<fitsio::errors::Error>,
        fits_filename: Box<Path>,
        source_file: &'static str,
        source_line: u32,
        source_column: u32,
    },

    /// Error describing a HDU that couldn't be used as a table.
    #[error("{source_file}:{source_line}:{source_column}: {fits_filename} HDU {hdu_num}: Tried to use as a binary table, but not a table")]
    NotTable {
        fits_filename: Box<Path>,
        hdu_num: usize,
        source_file: &'static str,
        source_line: u32,
        source_column: u32,
    },

    /// A generic error associated with the fitsio crate.
    #[error(
        "{source_file}:{source_line}:{source_column}: {fits_filename} HDU '{hdu_description}': {fits_error}"
    )]
    Fitsio {
        fits_error: Box<fitsio::errors::Error>,
        fits_filename: Box<Path>,
        hdu_description: Box<str>,
        source_file: &'static str,
        source_line: u32,
        source_column: u32,
    },
}

/// Open a fits file.
#[track_caller]
pub(crate) fn fits_open<P: AsRef<Path>>(file: P) -> Result<FitsFile, FitsError> {
    FitsFile::open(file.as_ref()).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Open {
            fits_error: Box::new(e),
            fits_filename: file.as_ref().to_path_buf().into_boxed_path(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// Open a fits file's HDU.
#[track_caller]
pub(crate) fn fits_open_hdu<T: DescribesHdu + Display + Copy>(
    fits_fptr: &mut FitsFile,
    hdu_description: T,
) -> Result<FitsHdu, FitsError> {
    fits_fptr.hdu(hdu_description).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Fitsio {
            fits_error: Box::new(e),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_description: format!("{hdu_description}").into_boxed_str(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// Get a whole scalar column from a fits file's HDU.
#[track_caller]
pub(crate) fn fits_get_col<T: fitsio::tables::ReadsCol>(
    fits_fptr: &mut FitsFile,
    hdu: &FitsHdu,
    col_name: &str,
) -> Result<Vec<T>, FitsError> {
    hdu.read_col(fits_fptr, col_name).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Fitsio {
            fits_error: Box::new(e),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_description: format!("{}", hdu.number + 1).into_boxed_str(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// The number of rows in a binary-table HDU.
#[track_caller]
pub(crate) fn fits_get_num_rows(
    fits_fptr: &FitsFile,
    hdu: &FitsHdu,
) -> Result<usize, FitsError> {
    match &hdu.info {
        HduInfo::TableInfo { num_rows, .. } => Ok(*num_rows),
        HduInfo::ImageInfo { .. } | HduInfo::AnyInfo => {
            let caller = std::panic::Location::caller();
            Err(FitsError::NotTable {
                fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
                hdu_num: hdu.number + 1,
                source_file: caller.file(),
                source_line: caller.line(),
                source_column: caller.column(),
            })
        }
    }
}

/// Wrap a raw cfitsio status into our error.
#[track_caller]
fn fits_check_status(fits_fptr: &FitsFile, status: c_int) -> Result<(), FitsError> {
    check_status(status).map_err(|e| {
        let caller = std::panic::Location::caller();
        FitsError::Fitsio {
            fits_error: Box::new(e),
            fits_filename: fits_fptr.file_path().to_path_buf().into_boxed_path(),
            hdu_description: "1".to_string().into_boxed_str(),
            source_file: caller.file(),
            source_line: caller.line(),
            source_column: caller.column(),
        }
    })
}

/// Convert a collection of Rust strings into C strings suitable for cfitsio's
/// `char**` arguments. The pointers own their allocations; free them with
/// [`deallocate_rust_c_strings`].
fn rust_strings_to_c_strings<S: AsRef<str>>(
    strings: &[S],
) -> Result<Vec<*mut c_char>, std::ffi::NulError> {
    strings
        .iter()
        .map(|s| CString::new(s.as_ref()).map(CString::into_raw))
        .collect()
}

/// Reclaim strings allocated by [`rust_strings_to_c_strings`].
fn deallocate_rust_c_strings(c_strings: Vec<*mut c_char>) {
    for ptr in c_strings {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Append a binary-table HDU with the given column names, TFORMs and TUNITs.
/// The TFORM strings may describe vector columns (e.g. "10D", "400A40"),
/// which is why this doesn't go through `fitsio`'s `ColumnDescription`.
#[track_caller]
pub(crate) fn fits_create_table(
    fits_fptr: &mut FitsFile,
    extname: &str,
    col_names: &[&str],
    col_formats: &[&str],
    col_units: &[&str],
) -> Result<(), FitsError> {
    let mut c_col_names =
        rust_strings_to_c_strings(col_names).expect("column names are valid C strings");
    let mut c_col_formats =
        rust_strings_to_c_strings(col_formats).expect("column formats are valid C strings");
    let mut c_col_units =
        rust_strings_to_c_strings(col_units).expect("column units are valid C strings");
    let c_extname = CString::new(extname).expect("extname is a valid C string");

    let mut status = 0;
    unsafe {
        // BINARY_TBL is 2. ffcrtb = fits_create_tbl
        fitsio_sys::ffcrtb(
            fits_fptr.as_raw(),         /* I - FITS file pointer                        */
            2,                          /* I - type of table to create                  */
            0,                          /* I - number of rows in the table              */
            col_names.len() as c_int,   /* I - number of columns in the table           */
            c_col_names.as_mut_ptr(),   /* I - name of each column                      */
            c_col_formats.as_mut_ptr(), /* I - value of TFORMn keyword for each column  */
            c_col_units.as_mut_ptr(),   /* I - value of TUNITn keyword for each column  */
            c_extname.as_ptr(),         /* I - value of EXTNAME keyword, if any         */
            &mut status,                /* IO - error status                            */
        );
    }
    deallocate_rust_c_strings(c_col_names);
    deallocate_rust_c_strings(c_col_formats);
    deallocate_rust_c_strings(c_col_units);
    fits_check_status(fits_fptr, status)
}

/// Write a whole f64 column. For vector columns, `values` is the
/// row-major flattening; cfitsio advances through rows automatically.
#[track_caller]
pub(crate) fn fits_write_col_f64(
    fits_fptr: &mut FitsFile,
    col_num: usize,
    values: &[f64],
) -> Result<(), FitsError> {
    let mut status = 0;
    unsafe {
        // ffpcld = fits_write_col_dbl
        fitsio_sys::ffpcld(
            fits_fptr.as_raw(),           /* I - FITS file pointer                       */
            col_num as c_int,             /* I - number of column to write (1 = 1st col) */
            1,                            /* I - first row to write (1 = 1st row)        */
            1,                            /* I - first vector element to write (1 = 1st) */
            values.len() as i64,          /* I - number of values to write               */
            values.as_ptr() as *mut f64,  /* I - array of values to write                */
            &mut status,                  /* IO - error status                           */
        );
    }
    fits_check_status(fits_fptr, status)
}

/// Write a whole string column. For string-array columns (TFORM "rAw"),
/// `values` contains `r / w` strings per row, flattened row-major.
#[track_caller]
pub(crate) fn fits_write_col_str<S: AsRef<str>>(
    fits_fptr: &mut FitsFile,
    col_num: usize,
    values: &[S],
) -> Result<(), FitsError> {
    let mut c_values =
        rust_strings_to_c_strings(values).expect("column values are valid C strings");
    let mut status = 0;
    unsafe {
        // ffpcls = fits_write_col_str
        fitsio_sys::ffpcls(
            fits_fptr.as_raw(),      /* I - FITS file pointer                       */
            col_num as c_int,        /* I - number of column to write (1 = 1st col) */
            1,                       /* I - first row to write (1 = 1st row)        */
            1,                       /* I - first vector element to write (1 = 1st) */
            c_values.len() as i64,   /* I - number of strings to write              */
            c_values.as_mut_ptr(),   /* I - array of pointers to strings            */
            &mut status,             /* IO - error status                           */
        );
    }
    deallocate_rust_c_strings(c_values);
    fits_check_status(fits_fptr, status)
}

/// Get the 1-indexed number of a column from its name.
#[cfg(test)]
#[track_caller]
fn fits_get_col_num(fits_fptr: &mut FitsFile, col_name: &str) -> Result<c_int, FitsError> {
    let mut status = 0;
    let mut col_num = -1;
    let c_col_name = CString::new(col_name).expect("column name is a valid C string");
    unsafe {
        // ffgcno = fits_get_colnum
        fitsio_sys::ffgcno(
            fits_fptr.as_raw(),
            0,
            c_col_name.as_ptr() as *mut c_char,
            &mut col_num,
            &mut status,
        );
    }
    fits_check_status(fits_fptr, status)?;
    Ok(col_num)
}

/// Read a whole f64 vector column as its row-major flattening. Null cells
/// come back as NaN. Only the tests inspect vector columns directly; the
/// reverse conversion takes its parameters from the XML files.
#[cfg(test)]
#[track_caller]
pub(crate) fn fits_read_col_f64_array(
    fits_fptr: &mut FitsFile,
    col_name: &str,
    num_rows: usize,
    repeat: usize,
) -> Result<Vec<f64>, FitsError> {
    let col_num = fits_get_col_num(fits_fptr, col_name)?;
    let n_elem = num_rows * repeat;
    let mut array: Vec<f64> = vec![0.0; n_elem];
    let mut nulval = f64::NAN;
    let mut anynul = 0;
    let mut status = 0;
    unsafe {
        // TDOUBLE is 82 (fitsio.h). ffgcv = fits_read_col
        fitsio_sys::ffgcv(
            fits_fptr.as_raw(),
            82,
            col_num,
            1,
            1,
            n_elem as i64,
            &mut nulval as *mut f64 as *mut _,
            array.as_mut_ptr().cast(),
            &mut anynul,
            &mut status,
        );
    }
    fits_check_status(fits_fptr, status)?;
    Ok(array)
}

/// Read a whole string-array column (TFORM "rAw") as its row-major
/// flattening of `r / w` strings per row. cfitsio returns an all-blank cell
/// as a single space, so trailing blanks are trimmed here; empty-string
/// padding reads back as "".
#[cfg(test)]
#[track_caller]
pub(crate) fn fits_read_col_str_array(
    fits_fptr: &mut FitsFile,
    col_name: &str,
    num_rows: usize,
) -> Result<Vec<String>, FitsError> {
    use std::os::raw::c_long;

    let col_num = fits_get_col_num(fits_fptr, col_name)?;

    // The repeat count of an "rAw" column counts characters; the number of
    // strings per row is repeat / width.
    let mut typecode = 0;
    let mut repeat: c_long = 0;
    let mut width: c_long = 0;
    let mut status = 0;
    unsafe {
        // ffgtcl = fits_get_coltype
        fitsio_sys::ffgtcl(
            fits_fptr.as_raw(),
            col_num,
            &mut typecode,
            &mut repeat,
            &mut width,
            &mut status,
        );
    }
    fits_check_status(fits_fptr, status)?;
    let strings_per_row = if width > 0 { (repeat / width).max(1) } else { 1 } as usize;
    let n_elem = num_rows * strings_per_row;

    let mut buffers: Vec<Vec<u8>> = vec![vec![0; width as usize + 1]; n_elem];
    let mut buffer_ptrs: Vec<*mut c_char> = buffers
        .iter_mut()
        .map(|b| b.as_mut_ptr() as *mut c_char)
        .collect();
    let nulstr = CString::new("").expect("valid C string");
    let mut anynul = 0;
    unsafe {
        // ffgcvs = fits_read_col_str
        fitsio_sys::ffgcvs(
            fits_fptr.as_raw(),
            col_num,
            1,
            1,
            n_elem as i64,
            nulstr.as_ptr() as *mut c_char,
            buffer_ptrs.as_mut_ptr(),
            &mut anynul,
            &mut status,
        );
    }
    fits_check_status(fits_fptr, status)?;

    Ok(buffers
        .iter()
        .map(|b| {
            unsafe { std::ffi::CStr::from_ptr(b.as_ptr() as *const c_char) }
                .to_string_lossy()
                .trim_end()
                .to_string()
        })
        .collect())
}
