
#[cfg(test)]
mod token_decode_tests;




#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod http_api_tests;
